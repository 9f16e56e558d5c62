//! # EcoLens Common Library
//!
//! Shared code for the EcoLens services including:
//! - Error types
//! - TOML bootstrap configuration and config-file discovery
//! - Logging initialisation

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
