//! Tests for configuration loading.

use std::io::Write;
use tictactoe_cli::{GameConfig, Opponent};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
    assert!(*config.clear_screen());
    assert!(*config.show_banner());
    assert_eq!(*config.opponent(), Opponent::Human);
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "opponent = \"computer\"\nclear_screen = false").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.opponent(), Opponent::Computer);
    assert!(!*config.clear_screen());
    assert!(*config.show_banner());
}

#[test]
fn test_invalid_file_reports_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "opponent = \"robot\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_overrides() {
    let config = GameConfig::default()
        .with_opponent(Opponent::Computer)
        .without_clear_screen();
    assert_eq!(*config.opponent(), Opponent::Computer);
    assert!(!*config.clear_screen());
}
