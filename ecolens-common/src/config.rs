//! Configuration loading and config-file discovery
//!
//! Bootstrap configuration follows this priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled defaults (fallback)
//!
//! A missing TOML file is never fatal: the caller gets defaults and a warning.
//! A TOML file that exists but cannot be read is an I/O error; one that cannot
//! be parsed is a configuration error.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Logging configuration (`[logging]` table)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` is not set (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Where a resolved secret came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    Environment,
    Toml,
}

impl SecretSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretSource::Environment => "environment",
            SecretSource::Toml => "TOML",
        }
    }
}

/// Locate the TOML config file for a module
///
/// Order: explicit path → `~/.config/ecolens/<module>.toml` → `/etc/ecolens/<module>.toml`.
/// An explicit path is returned even if it does not exist so the loader can warn about it.
pub fn config_file_path(module_name: &str, explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let file_name = format!("{}.toml", module_name);

    if let Some(user_config) = dirs::config_dir().map(|d| d.join("ecolens").join(&file_name)) {
        if user_config.exists() {
            return Some(user_config);
        }
    }

    let system_config = PathBuf::from("/etc/ecolens").join(&file_name);
    if system_config.exists() {
        return Some(system_config);
    }

    None
}

/// Load a TOML config file into `T`, falling back to `T::default()` when absent
pub fn load_toml_config<T>(path: Option<&Path>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(path) = path else {
        info!("No config file found, using compiled defaults");
        return Ok(T::default());
    };

    if !path.exists() {
        warn!(
            "Config file {} not found, using compiled defaults",
            path.display()
        );
        return Ok(T::default());
    }

    let content = std::fs::read_to_string(path)?;

    let config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse TOML failed ({}): {}", path.display(), e)))?;

    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Resolve a secret (API key) from the environment, then from TOML
///
/// Returns `None` when neither source holds a usable value. Warns when both are
/// set since only the environment value is used.
pub fn resolve_secret(env_var: &str, toml_value: Option<&str>) -> Option<(String, SecretSource)> {
    let env_value = std::env::var(env_var).ok().filter(|v| is_valid_key(v));
    let toml_value = toml_value.filter(|v| is_valid_key(v));

    if env_value.is_some() && toml_value.is_some() {
        warn!(
            "{} found in both environment and TOML. Using environment (highest priority).",
            env_var
        );
    }

    if let Some(value) = env_value {
        return Some((value.trim().to_string(), SecretSource::Environment));
    }

    toml_value.map(|value| (value.trim().to_string(), SecretSource::Toml))
}

/// Validate API key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}
