//! Integration tests for layered configuration loading

use super::with_ddir_env;
use ddir::config::{ConfigLoader, SETTINGS_FILE_NAME};
use ddir::resolve::DisplayPath;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_defaults_without_settings_file() {
    let test_dir = TempDir::new().unwrap();

    with_ddir_env(&test_dir, || {
        let config = ConfigLoader::load().unwrap();
        assert_eq!(config.display.path, DisplayPath::Resolved);
        assert!(config.store.pretty);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(
            config.store.document_path().unwrap(),
            test_dir.path().join("ddir").join("config.json")
        );
    });
}

#[test]
fn test_settings_file_in_ddir_home_is_applied() {
    let test_dir = TempDir::new().unwrap();
    let ddir_home = test_dir.path().join("ddir");
    fs::create_dir_all(&ddir_home).unwrap();
    fs::write(
        ddir_home.join(SETTINGS_FILE_NAME),
        r#"
[store]
document = "/srv/ddir/descriptions.json"
resolve_symlinks = true

[display]
path = "as-typed"
"#,
    )
    .unwrap();

    with_ddir_env(&test_dir, || {
        assert_eq!(
            ConfigLoader::settings_path(),
            Some(ddir_home.join(SETTINGS_FILE_NAME))
        );

        let config = ConfigLoader::load().unwrap();
        assert_eq!(
            config.store.document_path().unwrap(),
            PathBuf::from("/srv/ddir/descriptions.json")
        );
        assert!(config.store.resolve_symlinks);
        assert_eq!(config.display.path, DisplayPath::AsTyped);
    });
}

#[test]
fn test_environment_overrides_settings_file() {
    let test_dir = TempDir::new().unwrap();
    let ddir_home = test_dir.path().join("ddir");
    fs::create_dir_all(&ddir_home).unwrap();
    fs::write(
        ddir_home.join(SETTINGS_FILE_NAME),
        "[display]\npath = \"as-typed\"\n\n[logging]\nlevel = \"info\"\n",
    )
    .unwrap();

    with_ddir_env(&test_dir, || {
        std::env::set_var("DDIR_DISPLAY__PATH", "resolved");
        std::env::set_var("DDIR_STORE__PRETTY", "false");
        let result = ConfigLoader::load();
        std::env::remove_var("DDIR_DISPLAY__PATH");
        std::env::remove_var("DDIR_STORE__PRETTY");

        let config = result.unwrap();
        assert_eq!(config.display.path, DisplayPath::Resolved);
        assert!(!config.store.pretty);
        assert_eq!(config.logging.level, "info");
    });
}

#[test]
fn test_explicit_settings_file_must_exist() {
    let test_dir = TempDir::new().unwrap();
    let missing = test_dir.path().join("missing.toml");

    let err = ConfigLoader::load_from_file(&missing).unwrap_err();
    assert!(err.to_string().contains("Configuration file not found"));
}

#[test]
fn test_invalid_settings_are_rejected() {
    let test_dir = TempDir::new().unwrap();
    let settings = test_dir.path().join("bad.toml");
    fs::write(&settings, "[logging]\nformat = \"yaml\"\n").unwrap();

    with_ddir_env(&test_dir, || {
        let err = ConfigLoader::load_from_file(&settings).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("Invalid log format"));
    });
}
