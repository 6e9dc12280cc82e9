//! JSON document persistence for the description store

use crate::error::StoreError;
use crate::store::{DescriptionDocument, DescriptionStore};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the description document inside the ddir home directory.
pub const DOCUMENT_FILE_NAME: &str = "config.json";

/// Description document stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonDocument {
    path: PathBuf,
    pretty: bool,
}

impl JsonDocument {
    /// Document at `path`, written pretty-printed.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pretty: true,
        }
    }

    /// Toggle pretty-printed output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn serialize(&self, store: &DescriptionStore) -> Result<String, StoreError> {
        let mut json = if self.pretty {
            serde_json::to_string_pretty(store)
        } else {
            serde_json::to_string(store)
        }
        .map_err(StoreError::Serialize)?;
        json.push('\n');
        Ok(json)
    }
}

impl DescriptionDocument for JsonDocument {
    fn load(&self) -> Result<DescriptionStore, StoreError> {
        let path = self.path.as_path();

        if !path.exists() {
            tracing::debug!(document = %path.display(), "Description document absent, starting empty");
            return Ok(DescriptionStore::new());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            StoreError::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to read description document {:?}: {}", path, e),
            ))
        })?;

        let mut store: DescriptionStore =
            serde_json::from_str(&content).map_err(|source| StoreError::Format {
                path: path.to_path_buf(),
                source,
            })?;

        let rewritten = store.normalize_keys();
        if rewritten > 0 {
            tracing::debug!(document = %path.display(), rewritten, "Normalized hand-edited path keys");
        }

        for key in store.relative_keys() {
            tracing::warn!(
                document = %path.display(),
                key,
                "Ignoring non-absolute path key; it will never match a lookup"
            );
        }

        tracing::debug!(document = %path.display(), entries = store.len(), "Loaded description document");
        Ok(store)
    }

    /// Uses temporary file + rename so a failed write leaves the old document intact.
    fn save(&self, store: &DescriptionStore) -> Result<(), StoreError> {
        let path = self.path.as_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::IoError(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create parent directory {:?}: {}", parent, e),
                ))
            })?;
        }

        let serialized = self.serialize(store)?;

        let temp_path = temp_path_for(path);
        fs::write(&temp_path, serialized).map_err(|e| {
            StoreError::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to write description document to {:?}: {}", temp_path, e),
            ))
        })?;

        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file to {:?}: {}", path, e),
            ))
        })?;

        tracing::debug!(document = %path.display(), entries = store.len(), "Saved description document");
        Ok(())
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DOCUMENT_FILE_NAME.into());
    name.push(".tmp");
    path.with_file_name(name)
}
