//! Configuration loading tests.

use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

use leave_extract::{Config, LeaveError};

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("leave-extract.toml");
    let mut f = File::create(&path).unwrap();
    writeln!(
        f,
        r#"
[extraction]
max_input_len = 500

[message]
default_leave_type = "pl"
"#
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.extraction.max_input_len, Some(500));
    assert!(config.extraction.fallback_enabled);
    assert_eq!(config.message.default_leave_type, "pl");
    assert_eq!(config.message.intent_threshold, 0.6);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Config::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, LeaveError::Config(_)));
}

#[test]
fn test_invalid_file_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[message]\nintent_threshold = -1.0\n").unwrap();
    assert!(Config::from_file(&path).is_err());
}
