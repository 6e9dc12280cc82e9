//! Description resolution
//!
//! A query path is described by its own direct entry if it has one. Otherwise the
//! nearest ancestor carrying a pattern describes it, with every wildcard in the
//! pattern replaced by the query's segment directly under that ancestor.

use crate::error::StoreError;
use crate::path::{NormalizedPath, PathNormalizer};
use crate::store::{DescriptionStore, EntryKind};
use serde::{Deserialize, Serialize};

/// Placeholder in pattern descriptions, replaced by the child's name.
pub const WILDCARD: char = '*';

/// How the queried path is echoed back next to its description.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayPath {
    /// The absolute normalized path.
    #[default]
    Resolved,
    /// The argument exactly as given.
    AsTyped,
}

/// Outcome of resolving one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The path's own description, verbatim.
    Direct { description: String },
    /// Derived from the pattern at `ancestor`; `child` is the substituted segment.
    Pattern {
        ancestor: NormalizedPath,
        child: String,
        description: String,
    },
    /// Nothing describes the path.
    NotFound,
}

impl Resolution {
    pub fn description(&self) -> Option<&str> {
        match self {
            Resolution::Direct { description } | Resolution::Pattern { description, .. } => {
                Some(description)
            }
            Resolution::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Resolution::NotFound)
    }
}

/// A resolved lookup paired with the path to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub display_path: String,
    pub path: NormalizedPath,
    pub resolution: Resolution,
}

/// Read-only view over a store that answers "what describes this path".
pub struct Resolver<'a> {
    store: &'a DescriptionStore,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a DescriptionStore) -> Self {
        Self { store }
    }

    /// Resolve an already normalized path.
    pub fn resolve(&self, path: &NormalizedPath) -> Resolution {
        if let Some(description) = self.store.get(path, EntryKind::Direct) {
            return Resolution::Direct {
                description: description.to_string(),
            };
        }

        // `child` trails one level below `ancestor` so the substituted name is the
        // segment directly under whichever ancestor matches.
        let mut child = path.clone();
        let mut ancestor = path.parent();
        while let Some(current) = ancestor {
            if let Some(pattern) = self.store.get(&current, EntryKind::Pattern) {
                let name = child.file_name().unwrap_or_default().to_string();
                tracing::debug!(
                    path = %path,
                    ancestor = %current,
                    child = %name,
                    "Resolved through pattern"
                );
                return Resolution::Pattern {
                    description: substitute_wildcards(pattern, &name),
                    ancestor: current,
                    child: name,
                };
            }
            ancestor = current.parent();
            child = current;
        }

        Resolution::NotFound
    }

    /// Normalize `input` and resolve it, keeping the display form chosen by `display`.
    pub fn lookup(
        &self,
        normalizer: &PathNormalizer,
        input: &str,
        display: DisplayPath,
    ) -> Result<Lookup, StoreError> {
        let path = normalizer.normalize(input)?;
        let resolution = self.resolve(&path);
        let display_path = match display {
            DisplayPath::Resolved => path.as_str().to_string(),
            DisplayPath::AsTyped => input.to_string(),
        };
        Ok(Lookup {
            display_path,
            path,
            resolution,
        })
    }
}

/// Replace every wildcard in `template` with `name`.
pub fn substitute_wildcards(template: &str, name: &str) -> String {
    template.replace(WILDCARD, name)
}
