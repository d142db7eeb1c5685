//! Tests for VillageError type

use super::*;
use std::error::Error as _;

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: VillageError = io_err.into();
    let msg = error.to_string();
    assert!(msg.contains("IO error"));
    assert!(msg.contains("file not found"));
}

#[test]
fn test_config_error_display_and_source() {
    let source = toml::from_str::<toml::Value>("a = ").unwrap_err();
    let error = VillageError::Config {
        path: PathBuf::from("/tmp/village.toml"),
        source,
    };

    let msg = error.to_string();
    assert!(msg.starts_with("Invalid config file /tmp/village.toml"));
    assert!(error.source().is_some());
}
