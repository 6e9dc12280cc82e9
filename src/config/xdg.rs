//! XDG path helpers: where ddir keeps its settings and description document.

use crate::error::ApiError;
use std::path::PathBuf;

/// Directory name under the XDG config home.
pub const APP_DIR: &str = "ddir";

/// Overrides the ddir home directory entirely.
pub const HOME_ENV: &str = "DDIR_HOME";

/// `$XDG_CONFIG_HOME`, else `$HOME/.config`, else the platform config directory.
pub fn config_home() -> Result<PathBuf, ApiError> {
    if let Some(dir) = absolute_env_dir("XDG_CONFIG_HOME") {
        return Ok(dir);
    }
    if let Some(home) = absolute_env_dir("HOME") {
        return Ok(home.join(".config"));
    }
    directories::BaseDirs::new()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            ApiError::ConfigError(
                "Cannot determine config directory: neither XDG_CONFIG_HOME nor HOME is set"
                    .to_string(),
            )
        })
}

/// `$DDIR_HOME`, else `<config home>/ddir`.
pub fn ddir_home() -> Result<PathBuf, ApiError> {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    Ok(config_home()?.join(APP_DIR))
}

fn absolute_env_dir(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
}
