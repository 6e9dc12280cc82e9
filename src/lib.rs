//! ddir: Describe Directories
//!
//! Attach human-readable descriptions to filesystem paths and look them up later.
//! A pattern attached to a directory describes every child of that directory, with
//! `*` standing for the child's name.
//!
//! ```
//! use ddir::path::PathNormalizer;
//! use ddir::resolve::Resolver;
//! use ddir::store::{DescriptionStore, EntryKind};
//!
//! let normalizer = PathNormalizer::new("/");
//! let mut store = DescriptionStore::new();
//! store.set(&normalizer.normalize("/src").unwrap(), "the * module", EntryKind::Pattern);
//!
//! let resolver = Resolver::new(&store);
//! let parser = normalizer.normalize("/src/parser/mod.rs").unwrap();
//! assert_eq!(resolver.resolve(&parser).description(), Some("the parser module"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod resolve;
pub mod store;
