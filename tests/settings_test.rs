//! Tests for loading settings files.

use std::io::Write;
use tictactoe_replay::{Settings, SortOrder};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "sort_order = \"ascending\"").unwrap();
    writeln!(file, "show_history = false").unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.sort_order(), SortOrder::Ascending);
    assert!(!settings.show_history());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_missing_file_is_error_for_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read settings file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_history = \"maybe\"").unwrap();
    assert!(Settings::load_or_default(file.path()).is_err());
}
