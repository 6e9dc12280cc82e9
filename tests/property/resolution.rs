//! Property-based tests for lookup resolution

use ddir::path::{NormalizedPath, PathNormalizer};
use ddir::resolve::{Resolution, Resolver};
use ddir::store::{DescriptionDocument, DescriptionStore, EntryKind, JsonDocument};
use proptest::prelude::*;
use tempfile::TempDir;

fn segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z0-9_]{0,7}", 1..6)
}

fn key(segments: &[String]) -> NormalizedPath {
    PathNormalizer::new("/")
        .normalize(&format!("/{}", segments.join("/")))
        .unwrap()
}

/// A direct description comes back exactly as stored, whatever patterns sit above it
#[test]
fn test_direct_description_is_verbatim() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(segments(), any::<String>(), any::<String>()),
            |(segs, description, pattern)| {
                let mut store = DescriptionStore::new();
                let path = key(&segs);
                store.set(&path, description.clone(), EntryKind::Direct);
                store.set(&key(&[]), pattern, EntryKind::Pattern);

                let resolution = Resolver::new(&store).resolve(&path);
                assert_eq!(resolution.description(), Some(description.as_str()));
                assert!(matches!(resolution, Resolution::Direct { .. }));

                Ok(())
            },
        )
        .unwrap();
}

/// The wildcard is replaced by the segment directly under the pattern's owner
#[test]
fn test_pattern_substitutes_segment_under_ancestor() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(segments(), segments(), "[a-z ]{0,10}"),
            |(owner, below, suffix)| {
                let mut store = DescriptionStore::new();
                let owner_path = key(&owner);
                store.set(&owner_path, format!("*{}*", suffix), EntryKind::Pattern);

                let full: Vec<String> = owner.iter().chain(below.iter()).cloned().collect();
                let resolution = Resolver::new(&store).resolve(&key(&full));

                let expected = format!("{}{}{}", below[0], suffix, below[0]);
                match resolution {
                    Resolution::Pattern {
                        ancestor,
                        child,
                        description,
                    } => {
                        assert_eq!(ancestor, owner_path);
                        assert_eq!(child, below[0]);
                        assert_eq!(description, expected);
                    }
                    other => panic!("expected pattern resolution, got {:?}", other),
                }

                Ok(())
            },
        )
        .unwrap();
}

/// With patterns at several ancestors, the deepest one answers
#[test]
fn test_nearest_pattern_ancestor_wins() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(segments(), segments(), segments()), |(outer, inner, rest)| {
            let mut store = DescriptionStore::new();
            let outer_path = key(&outer);
            let inner_full: Vec<String> = outer.iter().chain(inner.iter()).cloned().collect();
            let inner_path = key(&inner_full);
            store.set(&outer_path, "outer *", EntryKind::Pattern);
            store.set(&inner_path, "inner *", EntryKind::Pattern);

            let full: Vec<String> = inner_full.iter().chain(rest.iter()).cloned().collect();
            let resolution = Resolver::new(&store).resolve(&key(&full));
            assert_eq!(
                resolution.description(),
                Some(format!("inner {}", rest[0]).as_str())
            );

            Ok(())
        })
        .unwrap();
}

/// A pattern never describes the path that owns it
#[test]
fn test_pattern_owner_not_self_described() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&segments(), |segs| {
            let mut store = DescriptionStore::new();
            let path = key(&segs);
            store.set(&path, "* below", EntryKind::Pattern);

            assert_eq!(Resolver::new(&store).resolve(&path), Resolution::NotFound);

            Ok(())
        })
        .unwrap();
}

/// Saving then loading the document reproduces the store
#[test]
fn test_document_save_load_preserves_entries() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec((segments(), any::<String>(), any::<bool>()), 0..8),
            |entries| {
                let temp_dir = TempDir::new().unwrap();
                let document = JsonDocument::new(temp_dir.path().join("config.json"));

                let mut store = DescriptionStore::new();
                for (segs, description, is_pattern) in &entries {
                    let kind = if *is_pattern {
                        EntryKind::Pattern
                    } else {
                        EntryKind::Direct
                    };
                    store.set(&key(segs), description.clone(), kind);
                }

                document.save(&store).unwrap();
                assert_eq!(document.load().unwrap(), store);

                Ok(())
            },
        )
        .unwrap();
}
