//! Path normalization utilities
//!
//! Every key in the description store is an absolute path produced here. Relative
//! input is joined onto the working directory, `.` and `..` segments are collapsed
//! lexically, Unicode is normalized to NFC and trailing separators are dropped.

use crate::error::StoreError;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// An absolute, normalized path. Only [`PathNormalizer`] creates these.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedPath(String);

impl NormalizedPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Parent directory, `None` at the root.
    pub fn parent(&self) -> Option<NormalizedPath> {
        self.as_path()
            .parent()
            .and_then(|p| p.to_str())
            .map(|s| NormalizedPath(s.to_string()))
    }

    /// Last segment, `None` for the root.
    pub fn file_name(&self) -> Option<&str> {
        self.as_path().file_name().and_then(|n| n.to_str())
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turns user-supplied path strings into [`NormalizedPath`] keys.
#[derive(Debug, Clone)]
pub struct PathNormalizer {
    cwd: PathBuf,
    resolve_symlinks: bool,
}

impl PathNormalizer {
    /// Normalizer that resolves relative input against `cwd`.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            resolve_symlinks: false,
        }
    }

    /// Normalizer bound to the process working directory.
    pub fn from_current_dir() -> Result<Self, StoreError> {
        let cwd = std::env::current_dir().map_err(|e| {
            StoreError::InvalidPath(format!("Failed to read current directory: {}", e))
        })?;
        Ok(Self::new(cwd))
    }

    /// Canonicalize the existing prefix of every path (follows symlinks).
    pub fn with_symlink_resolution(mut self, enabled: bool) -> Self {
        self.resolve_symlinks = enabled;
        self
    }

    /// Normalize `input` into an absolute store key.
    pub fn normalize(&self, input: &str) -> Result<NormalizedPath, StoreError> {
        if input.is_empty() {
            return Err(StoreError::InvalidPath("Path is empty".to_string()));
        }

        let input_path = Path::new(input);
        let joined = if input_path.is_absolute() {
            input_path.to_path_buf()
        } else {
            if !self.cwd.is_absolute() {
                return Err(StoreError::InvalidPath(format!(
                    "Cannot resolve {} against non-absolute directory {}",
                    input,
                    self.cwd.display()
                )));
            }
            self.cwd.join(input_path)
        };

        let mut collapsed = collapse_dots(&joined);
        if self.resolve_symlinks {
            collapsed = canonicalize_existing_prefix(&collapsed)?;
        }

        let path_str = collapsed.to_str().ok_or_else(|| {
            StoreError::InvalidPath(format!("Path is not valid UTF-8: {}", collapsed.display()))
        })?;

        Ok(NormalizedPath(normalize_path_string(path_str)))
    }
}

/// Lexically drop `.` segments and apply `..` without touching the filesystem.
/// `..` at the root stays at the root.
fn collapse_dots(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if out.file_name().is_some() {
                    out.pop();
                }
            }
            Component::Normal(name) => out.push(name),
        }
    }
    out
}

/// Canonicalize the longest existing prefix of `path` and re-append the rest.
fn canonicalize_existing_prefix(path: &Path) -> Result<PathBuf, StoreError> {
    let mut existing = path;
    let mut remainder: Vec<&OsStr> = Vec::new();

    // symlink_metadata so dangling links and loops count as present and fail below
    while std::fs::symlink_metadata(existing).is_err() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                remainder.push(name);
                existing = parent;
            }
            _ => return Ok(path.to_path_buf()),
        }
    }

    let mut resolved = dunce::canonicalize(existing).map_err(|e| {
        StoreError::InvalidPath(format!(
            "Failed to canonicalize path {}: {}",
            existing.display(),
            e
        ))
    })?;
    for name in remainder.iter().rev() {
        resolved.push(name);
    }
    Ok(resolved)
}

/// Normalize a path string (without filesystem access)
///
/// Applies NFC and removes trailing separators, keeping a bare root intact.
pub fn normalize_path_string(path: &str) -> String {
    let mut result: String = path.nfc().collect();
    while result.len() > 1 && result.ends_with(std::path::is_separator) {
        result.pop();
    }
    result
}

/// Lexically normalize a key read back from a document, the same way
/// [`PathNormalizer::normalize`] treats absolute input. Relative keys yield `None`.
pub fn normalize_stored_key(key: &str) -> Option<String> {
    let path = Path::new(key);
    if !path.is_absolute() {
        return None;
    }
    collapse_dots(path).to_str().map(normalize_path_string)
}
