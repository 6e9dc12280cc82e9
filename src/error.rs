//! Error types for the ddir description store.

use std::path::PathBuf;
use thiserror::Error;

/// Store-related errors: path normalization and the persisted document.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Malformed description document {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize description document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Top-level errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid arguments: {0}")]
    Argument(String),

    #[error("{0}")]
    StoreError(#[from] StoreError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl ApiError {
    /// Process exit code for this error. Argument errors share clap's usage code.
    pub fn exit_code(&self) -> i32 {
        match self {
            ApiError::Argument(_) => 2,
            _ => 1,
        }
    }
}
