//! Configuration System
//!
//! Layered settings for ddir: built-in defaults, the optional `settings.toml` in the
//! ddir home directory (or an explicit file), then `DDIR_*` environment variables.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::resolve::DisplayPath;
use crate::store::persistence::DOCUMENT_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge_policy;
mod sources;
pub mod xdg;

pub use facade::ConfigLoader;

/// File name of the settings file inside the ddir home directory.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DdirConfig {
    /// Description document settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Output settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and how the description document is kept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Full path of the document; defaults to `<ddir home>/config.json`
    #[serde(default)]
    pub document: Option<PathBuf>,

    /// Write pretty-printed JSON
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Follow symlinks when normalizing paths
    #[serde(default)]
    pub resolve_symlinks: bool,
}

fn default_true() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            document: None,
            pretty: default_true(),
            resolve_symlinks: false,
        }
    }
}

impl StoreConfig {
    /// Resolved document path, falling back to the ddir home directory.
    pub fn document_path(&self) -> Result<PathBuf, ApiError> {
        match &self.document {
            Some(path) => Ok(path.clone()),
            None => Ok(xdg::ddir_home()?.join(DOCUMENT_FILE_NAME)),
        }
    }
}

/// Lookup output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Echo the resolved path or the argument as typed
    #[serde(default)]
    pub path: DisplayPath,

    /// Highlight paths when writing to a terminal
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            path: DisplayPath::default(),
            color: default_true(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Store(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Store(msg) => write!(f, "Store: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl DdirConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Some(ref document) = self.store.document {
            if document.as_os_str().is_empty() {
                errors.push(ValidationError::Store(
                    "Document path cannot be empty".to_string(),
                ));
            }
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
