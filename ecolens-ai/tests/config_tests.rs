//! Service configuration layering tests
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate environment variables are marked with #[serial].

use ecolens_ai::config::{ServiceConfig, API_KEY_ENV, DEFAULT_PORT};
use ecolens_ai::engine::SnakeFallback;
use ecolens_common::Error;
use serial_test::serial;
use ecolens_common::logging::with_bootstrap_logging_to;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

/// Same directives the binaries start with
const STARTUP_DIRECTIVES: &str = "ecolens_ai={level},ecolens_common={level}";

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("ecolens-ai.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
#[serial]
fn test_missing_file_uses_defaults() {
    env::remove_var(API_KEY_ENV);
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    let config = ServiceConfig::load(None, Some(&path)).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_address, "127.0.0.1");
    assert_eq!(config.classifier.api_key, None);
    assert_eq!(config.snake_fallback, SnakeFallback::ContextHeuristic);
    assert_eq!(config.thresholds.high_confidence_passthrough, 0.9);
}

#[test]
#[serial]
fn test_file_values_are_loaded() {
    env::remove_var(API_KEY_ENV);
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
bind_address = "0.0.0.0"
port = 6100

[logging]
level = "debug"

[classifier]
api_key = "toml-key"
base_url = "http://localhost:9000/v2/"
flower_model = ""
timeout_secs = 3

[thresholds]
min_concept_confidence = 0.25

[resolver]
snake_fallback = "random_species"

[quiz]
max_sessions = 16
session_ttl_secs = 120
"#,
    );

    let config = ServiceConfig::load(None, Some(&path)).unwrap();
    assert_eq!(config.listen_address(), "0.0.0.0:6100");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.classifier.api_key.as_deref(), Some("toml-key"));
    assert_eq!(config.classifier.base_url, "http://localhost:9000/v2");
    assert_eq!(config.classifier.flower_model, None);
    assert_eq!(config.classifier.timeout, Duration::from_secs(3));
    assert_eq!(config.thresholds.min_concept_confidence, 0.25);
    assert_eq!(config.thresholds.low_confidence_fallback, 0.4);
    assert_eq!(config.snake_fallback, SnakeFallback::RandomSpecies);
    assert_eq!(config.quiz_sessions.max_sessions, 16);
    assert_eq!(config.quiz_sessions.ttl, Duration::from_secs(120));
}

#[test]
#[serial]
fn test_zero_quiz_sessions_is_config_error() {
    env::remove_var(API_KEY_ENV);
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[quiz]\nmax_sessions = 0\n");

    let result = ServiceConfig::load(None, Some(&path));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_cli_port_beats_file() {
    env::remove_var(API_KEY_ENV);
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "port = 6100\n");

    let config = ServiceConfig::load(Some(7000), Some(&path)).unwrap();
    assert_eq!(config.port, 7000);
}

#[test]
#[serial]
fn test_environment_key_beats_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[classifier]\napi_key = \"toml-key\"\n");

    env::set_var(API_KEY_ENV, "env-key");
    let config = ServiceConfig::load(None, Some(&path)).unwrap();
    env::remove_var(API_KEY_ENV);

    assert_eq!(config.classifier.api_key.as_deref(), Some("env-key"));
}

#[test]
#[serial]
fn test_blank_environment_key_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[classifier]\napi_key = \"toml-key\"\n");

    env::set_var(API_KEY_ENV, "   ");
    let config = ServiceConfig::load(None, Some(&path)).unwrap();
    env::remove_var(API_KEY_ENV);

    assert_eq!(config.classifier.api_key.as_deref(), Some("toml-key"));
}

#[test]
#[serial]
fn test_out_of_range_threshold_is_config_error() {
    env::remove_var(API_KEY_ENV);
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[thresholds]\nflower_min_confidence = 2.0\n");

    let result = ServiceConfig::load(None, Some(&path));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_malformed_file_is_config_error() {
    env::remove_var(API_KEY_ENV);
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "port = \"not a number\"\n");

    let result = ServiceConfig::load(None, Some(&path));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_startup_warnings_are_logged_before_tracing_init() {
    env::remove_var(API_KEY_ENV);
    env::remove_var("RUST_LOG");
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nonexistent.toml");
    let logs = CapturedLogs::default();

    let config = with_bootstrap_logging_to(STARTUP_DIRECTIVES, logs.clone(), || {
        ServiceConfig::load(None, Some(&path))
    })
    .unwrap();

    assert_eq!(config.classifier.api_key, None);
    let output = logs.contents();
    assert!(output.contains("not found, using compiled defaults"), "{}", output);
    assert!(output.contains("Classifier API key not configured"), "{}", output);
}
