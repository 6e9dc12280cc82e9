//! Config loading entry point.

use super::merge_policy::builder_with_defaults;
use super::sources::{environment, global_file};
use super::DdirConfig;
use crate::error::ApiError;
use config::builder::DefaultState;
use config::ConfigBuilder;
use std::path::{Path, PathBuf};

/// Loads [`DdirConfig`] from defaults, a settings file and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load using the default settings file location.
    pub fn load() -> Result<DdirConfig, ApiError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        Self::finish(environment::add_to_builder(builder))
    }

    /// Load with `path` in place of the default settings file. The file must exist.
    pub fn load_from_file(path: &Path) -> Result<DdirConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let builder = builder_with_defaults()?;
        let builder = global_file::add_file(builder, path, true)?;
        Self::finish(environment::add_to_builder(builder))
    }

    /// Default settings file location.
    pub fn settings_path() -> Option<PathBuf> {
        global_file::settings_path()
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<DdirConfig, ApiError> {
        let config: DdirConfig = builder.build()?.try_deserialize()?;
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}
