//! Settings file source: $DDIR_HOME/settings.toml or $XDG_CONFIG_HOME/ddir/settings.toml

use crate::config::{xdg, SETTINGS_FILE_NAME};
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::{File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path to the settings file, if a ddir home directory can be determined.
pub fn settings_path() -> Option<PathBuf> {
    xdg::ddir_home()
        .ok()
        .map(|home| home.join(SETTINGS_FILE_NAME))
}

/// Add the default settings file to the builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match settings_path() {
        Some(path) if path.exists() => add_file(builder, &path, false),
        Some(path) => {
            debug!(
                config_path = %path.display(),
                "No settings file found, using defaults"
            );
            Ok(builder)
        }
        None => Ok(builder),
    }
}

/// Add a TOML settings file at `path` to the builder.
pub fn add_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
    required: bool,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let name = path.to_str().ok_or_else(|| {
        ConfigError::Message(format!(
            "Settings file path is not valid UTF-8: {}",
            path.display()
        ))
    })?;
    Ok(builder.add_source(File::new(name, FileFormat::Toml).required(required)))
}
