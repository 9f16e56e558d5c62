//! HTTP API handlers for ecolens-ai

pub mod catalog;
pub mod health;
pub mod identify;
pub mod quiz;

pub use catalog::catalog_routes;
pub use health::health_routes;
pub use identify::identify_routes;
pub use quiz::quiz_routes;
