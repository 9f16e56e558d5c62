//! ecolens-ai library interface
//!
//! Core engine (normalize → resolve → compose → quiz), classifier gateway,
//! and the HTTP API. Exposed as a library for the binaries and integration tests.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod knowledge;
pub mod narrative;
pub mod quiz;
pub mod types;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use engine::NatureEngine;
use gateway::DetectionPipeline;
use quiz::{QuizSessionStore, SessionLimits};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Pure core, shared read-only
    pub engine: Arc<NatureEngine>,
    /// Classifier with local fallbacks
    pub pipeline: Arc<DetectionPipeline>,
    /// Active quiz sessions, one per detection cycle, pruned on insert
    pub quiz_sessions: Arc<RwLock<QuizSessionStore>>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(engine: NatureEngine, pipeline: DetectionPipeline) -> Self {
        Self::with_session_limits(engine, pipeline, SessionLimits::default())
    }

    pub fn with_session_limits(
        engine: NatureEngine,
        pipeline: DetectionPipeline,
        limits: SessionLimits,
    ) -> Self {
        Self {
            engine: Arc::new(engine),
            pipeline: Arc::new(pipeline),
            quiz_sessions: Arc::new(RwLock::new(QuizSessionStore::new(limits))),
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::health_routes())
        .merge(api::identify_routes())
        .merge(api::catalog_routes())
        .merge(api::quiz_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
