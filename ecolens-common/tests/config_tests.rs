//! Configuration loading and graceful degradation tests
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate environment variables are marked with #[serial].

use ecolens_common::config::{load_toml_config, resolve_secret, LoggingConfig, SecretSource};
use ecolens_common::Error;
use serde::Deserialize;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Default, Deserialize, PartialEq)]
struct SampleConfig {
    #[serde(default)]
    port: Option<u16>,
    #[serde(default)]
    logging: LoggingConfig,
}

#[test]
fn test_missing_path_yields_defaults() {
    let config: SampleConfig = load_toml_config(None).unwrap();
    assert_eq!(config, SampleConfig::default());
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    let config: SampleConfig = load_toml_config(Some(&path)).unwrap();
    assert_eq!(config.port, None);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_file_values_are_loaded() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sample.toml");
    fs::write(&path, "port = 6001\n[logging]\nlevel = \"debug\"\n").unwrap();

    let config: SampleConfig = load_toml_config(Some(&path)).unwrap();
    assert_eq!(config.port, Some(6001));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_malformed_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "port = \"not a number").unwrap();

    let result: Result<SampleConfig, Error> = load_toml_config(Some(&path));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_unreadable_file_is_io_error() {
    // Exists, but is a directory
    let temp_dir = TempDir::new().unwrap();

    let result: Result<SampleConfig, Error> = load_toml_config(Some(temp_dir.path()));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
#[serial]
fn test_secret_env_beats_toml() {
    env::set_var("ECOLENS_TEST_SECRET", "from-env");

    let resolved = resolve_secret("ECOLENS_TEST_SECRET", Some("from-toml"));
    assert_eq!(
        resolved,
        Some(("from-env".to_string(), SecretSource::Environment))
    );

    env::remove_var("ECOLENS_TEST_SECRET");
}

#[test]
#[serial]
fn test_secret_falls_back_to_toml() {
    env::remove_var("ECOLENS_TEST_SECRET");

    let resolved = resolve_secret("ECOLENS_TEST_SECRET", Some("  from-toml "));
    assert_eq!(resolved, Some(("from-toml".to_string(), SecretSource::Toml)));
}

#[test]
#[serial]
fn test_blank_secrets_are_ignored() {
    env::set_var("ECOLENS_TEST_SECRET", "   ");

    let resolved = resolve_secret("ECOLENS_TEST_SECRET", Some(""));
    assert_eq!(resolved, None);

    env::remove_var("ECOLENS_TEST_SECRET");
}
