//! Description Store
//!
//! In-memory map from normalized paths to direct descriptions and pattern
//! templates. A path may carry one entry of each kind; setting an entry of a
//! kind that already exists replaces it.

pub mod persistence;

pub use persistence::JsonDocument;

use crate::error::StoreError;
use crate::path::{normalize_stored_key, NormalizedPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// What an entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Describes the path itself.
    Direct,
    /// Describes the path's descendants, never the path itself.
    Pattern,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Direct => f.write_str("direct"),
            EntryKind::Pattern => f.write_str("pattern"),
        }
    }
}

/// One stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub path: String,
    pub description: String,
    pub kind: EntryKind,
}

/// Path descriptions, laid out the way the persisted document is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionStore {
    #[serde(default)]
    descriptions: BTreeMap<String, String>,
    #[serde(default)]
    patterns: BTreeMap<String, String>,
}

impl DescriptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry of `kind` at `path`. Returns the replaced description.
    pub fn set(
        &mut self,
        path: &NormalizedPath,
        description: impl Into<String>,
        kind: EntryKind,
    ) -> Option<String> {
        self.map_mut(kind)
            .insert(path.as_str().to_string(), description.into())
    }

    /// Exact-match lookup; no ancestor search.
    pub fn get(&self, path: &NormalizedPath, kind: EntryKind) -> Option<&str> {
        self.map(kind).get(path.as_str()).map(String::as_str)
    }

    /// All entries ordered by path, direct before pattern.
    pub fn entries(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self
            .descriptions
            .iter()
            .map(|(path, description)| (path, description, EntryKind::Direct))
            .chain(
                self.patterns
                    .iter()
                    .map(|(path, description)| (path, description, EntryKind::Pattern)),
            )
            .map(|(path, description, kind)| Entry {
                path: path.clone(),
                description: description.clone(),
                kind,
            })
            .collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path).then(a.kind.cmp(&b.kind)));
        entries
    }

    pub fn len(&self) -> usize {
        self.descriptions.len() + self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty() && self.patterns.is_empty()
    }

    /// Re-key absolute keys that were not written in normalized form, such as a
    /// hand-edited `/d/`. An existing normalized key wins over variants that
    /// collapse onto it. Returns the number of keys rewritten.
    pub fn normalize_keys(&mut self) -> usize {
        let mut rewritten = 0;
        for map in [&mut self.descriptions, &mut self.patterns] {
            let mut normalized = BTreeMap::new();
            for (key, description) in std::mem::take(map) {
                match normalize_stored_key(&key) {
                    Some(clean) if clean != key => {
                        rewritten += 1;
                        normalized.entry(clean).or_insert(description);
                    }
                    _ => {
                        normalized.insert(key, description);
                    }
                }
            }
            *map = normalized;
        }
        rewritten
    }

    /// Keys that are not absolute. Only hand edits can introduce these; they never match a lookup.
    pub fn relative_keys(&self) -> Vec<&str> {
        self.descriptions
            .keys()
            .chain(self.patterns.keys())
            .filter(|key| !std::path::Path::new(key.as_str()).is_absolute())
            .map(String::as_str)
            .collect()
    }

    fn map(&self, kind: EntryKind) -> &BTreeMap<String, String> {
        match kind {
            EntryKind::Direct => &self.descriptions,
            EntryKind::Pattern => &self.patterns,
        }
    }

    fn map_mut(&mut self, kind: EntryKind) -> &mut BTreeMap<String, String> {
        match kind {
            EntryKind::Direct => &mut self.descriptions,
            EntryKind::Pattern => &mut self.patterns,
        }
    }
}

/// Persisted home of a [`DescriptionStore`].
pub trait DescriptionDocument {
    /// Load the store; an absent document yields an empty store.
    fn load(&self) -> Result<DescriptionStore, StoreError>;

    /// Replace the document with the full contents of `store`.
    fn save(&self, store: &DescriptionStore) -> Result<(), StoreError>;
}
