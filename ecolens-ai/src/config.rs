//! Configuration resolution for ecolens-ai
//!
//! Priority: command line → environment → TOML file → compiled defaults.
//! The clap layer in `main` folds `ECOLENS_PORT`/`ECOLENS_CONFIG` into the CLI
//! values; the classifier API key is resolved here (environment, then TOML).

use crate::engine::SnakeFallback;
use crate::quiz::SessionLimits;
use ecolens_common::config::{config_file_path, load_toml_config, resolve_secret, LoggingConfig};
use ecolens_common::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

pub const MODULE_NAME: &str = "ecolens-ai";
pub const DEFAULT_PORT: u16 = 5730;
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
pub const API_KEY_ENV: &str = "ECOLENS_CLASSIFIER_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.clarifai.com/v2";
const DEFAULT_GENERAL_MODEL: &str = "general-image-recognition";
const DEFAULT_FLOWER_MODEL: &str = "flower-recognition";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

// ============================================================================
// Thresholds
// ============================================================================

/// Every confidence cut-off used by the gateway and the resolver
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Classifier concepts below this are dropped
    pub min_concept_confidence: f64,
    /// Best surviving concept below this hands over to the local heuristics
    pub low_confidence_fallback: f64,
    /// Specialist flower label is adopted at or above this
    pub flower_min_confidence: f64,
    /// General model top concept at or above this skips the specialist
    pub general_model_trust: f64,
    /// Resolver tier 5 passes a label through only strictly above this
    pub high_confidence_passthrough: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_concept_confidence: 0.3,
            low_confidence_fallback: 0.4,
            flower_min_confidence: 0.5,
            general_model_trust: 0.85,
            high_confidence_passthrough: 0.9,
        }
    }
}

impl Thresholds {
    /// Every threshold must lie in [0.0, 1.0]
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("min_concept_confidence", self.min_concept_confidence),
            ("low_confidence_fallback", self.low_confidence_fallback),
            ("flower_min_confidence", self.flower_min_confidence),
            ("general_model_trust", self.general_model_trust),
            ("high_confidence_passthrough", self.high_confidence_passthrough),
        ];
        for (name, value) in named {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::Config(format!(
                    "thresholds.{} must be within [0.0, 1.0], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// TOML file
// ============================================================================

/// `[classifier]` table
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClassifierSection {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub general_model: Option<String>,
    /// Empty string disables the specialist model
    pub flower_model: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// `[resolver]` table
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResolverSection {
    pub snake_fallback: SnakeFallback,
}

/// `[quiz]` table
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuizSection {
    /// Live sessions kept before the oldest are evicted
    pub max_sessions: Option<usize>,
    pub session_ttl_secs: Option<u64>,
}

/// On-disk form of `ecolens-ai.toml`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceToml {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub logging: LoggingConfig,
    pub classifier: ClassifierSection,
    pub thresholds: Thresholds,
    pub resolver: ResolverSection,
    pub quiz: QuizSection,
}

// ============================================================================
// Resolved configuration
// ============================================================================

/// Classifier settings after secret resolution
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    /// `None` runs the service on local fallbacks only
    pub api_key: Option<String>,
    pub base_url: String,
    pub general_model: String,
    pub flower_model: Option<String>,
    pub timeout: Duration,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            general_model: DEFAULT_GENERAL_MODEL.to_string(),
            flower_model: Some(DEFAULT_FLOWER_MODEL.to_string()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub bind_address: String,
    pub port: u16,
    pub logging: LoggingConfig,
    pub classifier: ClassifierConfig,
    pub thresholds: Thresholds,
    pub snake_fallback: SnakeFallback,
    pub quiz_sessions: SessionLimits,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            logging: LoggingConfig::default(),
            classifier: ClassifierConfig::default(),
            thresholds: Thresholds::default(),
            snake_fallback: SnakeFallback::default(),
            quiz_sessions: SessionLimits::default(),
        }
    }
}

impl ServiceConfig {
    /// Load the TOML file (explicit path or discovered) and merge the CLI port over it
    pub fn load(cli_port: Option<u16>, explicit_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path(MODULE_NAME, explicit_path);
        let toml: ServiceToml = load_toml_config(path.as_deref())?;
        Self::from_toml(toml, cli_port)
    }

    /// Merge a parsed TOML file with the CLI port and the environment
    pub fn from_toml(toml: ServiceToml, cli_port: Option<u16>) -> Result<Self> {
        toml.thresholds.validate()?;
        if toml.quiz.max_sessions == Some(0) {
            return Err(Error::Config("quiz.max_sessions must be at least 1".to_string()));
        }

        let port = cli_port.or(toml.port).unwrap_or(DEFAULT_PORT);
        let bind_address = toml
            .bind_address
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let api_key = match resolve_secret(API_KEY_ENV, toml.classifier.api_key.as_deref()) {
            Some((key, source)) => {
                info!("Classifier API key loaded from {}", source.as_str());
                Some(key)
            }
            None => {
                warn!(
                    "Classifier API key not configured ({} or [classifier] api_key); \
                     identification will use local fallbacks only",
                    API_KEY_ENV
                );
                None
            }
        };

        let defaults = ClassifierConfig::default();
        let session_defaults = SessionLimits::default();
        let flower_model = match toml.classifier.flower_model {
            Some(model) if model.trim().is_empty() => None,
            Some(model) => Some(model),
            None => defaults.flower_model,
        };

        let classifier = ClassifierConfig {
            api_key,
            base_url: toml
                .classifier
                .base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            general_model: toml.classifier.general_model.unwrap_or(defaults.general_model),
            flower_model,
            timeout: toml
                .classifier
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        };

        Ok(Self {
            bind_address,
            port,
            logging: toml.logging,
            classifier,
            thresholds: toml.thresholds,
            snake_fallback: toml.resolver.snake_fallback,
            quiz_sessions: SessionLimits {
                max_sessions: toml.quiz.max_sessions.unwrap_or(session_defaults.max_sessions),
                ttl: toml
                    .quiz
                    .session_ttl_secs
                    .map(Duration::from_secs)
                    .unwrap_or(session_defaults.ttl),
            },
        })
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_defaults() {
        let t = Thresholds::default();
        assert_eq!(t.min_concept_confidence, 0.3);
        assert_eq!(t.low_confidence_fallback, 0.4);
        assert_eq!(t.flower_min_confidence, 0.5);
        assert_eq!(t.general_model_trust, 0.85);
        assert_eq!(t.high_confidence_passthrough, 0.9);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let t = Thresholds {
            high_confidence_passthrough: 1.5,
            ..Thresholds::default()
        };
        assert!(matches!(t.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml: ServiceToml = toml::from_str(
            "port = 6000\n[thresholds]\nhigh_confidence_passthrough = 0.95\n[resolver]\nsnake_fallback = \"random_species\"\n",
        )
        .unwrap();
        assert_eq!(toml.port, Some(6000));
        assert_eq!(toml.thresholds.high_confidence_passthrough, 0.95);
        assert_eq!(toml.thresholds.min_concept_confidence, 0.3);
        assert_eq!(toml.resolver.snake_fallback, SnakeFallback::RandomSpecies);
    }

    #[test]
    fn test_listen_address() {
        assert_eq!(ServiceConfig::default().listen_address(), "127.0.0.1:5730");
    }
}
