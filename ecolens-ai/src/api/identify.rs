//! Identification endpoints
//!
//! - `POST /identify`: image (and/or sampled pixels) → full analysis
//! - `POST /resolve`: host-supplied labels → full analysis, no classifier call
//!
//! Both start a fresh quiz session for the resolved category. A client that
//! passes its previous session id gets that session discarded; abandoned ones
//! are pruned by the session store on insert.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::Analysis;
use crate::error::{ApiError, ApiResult};
use crate::gateway::DetectionRequest;
use crate::narrative::{BridgePayload, SectionKind};
use crate::quiz::QuizSession;
use crate::types::DetectionResult;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct IdentifyRequest {
    #[serde(flatten)]
    pub detection: DetectionRequest,
    /// Quiz session from the previous image, discarded on success
    #[serde(default)]
    pub previous_session_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    pub name: String,
    pub confidence: f64,
    #[serde(default)]
    pub concepts: Vec<String>,
    #[serde(default)]
    pub previous_session_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct SectionBody {
    pub kind: SectionKind,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct IdentifyResponse {
    pub detection: DetectionResult,
    #[serde(flatten)]
    pub analysis: Analysis,
    pub sections: Vec<SectionBody>,
    pub display_text: String,
    pub bridge: BridgePayload,
    pub quiz_session_id: Uuid,
}

/// POST /identify
pub async fn identify(
    State(state): State<AppState>,
    Json(request): Json<IdentifyRequest>,
) -> ApiResult<Json<IdentifyResponse>> {
    let has_image = request
        .detection
        .image_base64
        .as_deref()
        .is_some_and(|i| !i.trim().is_empty());
    if !has_image && request.detection.pixels.is_empty() {
        tracing::debug!("Identify request without image or pixels, random fallback will be used");
    }

    let detection = state.pipeline.detect(&request.detection).await;
    respond(&state, detection, request.previous_session_id).await
}

/// POST /resolve
pub async fn resolve(
    State(state): State<AppState>,
    Json(request): Json<ResolveRequest>,
) -> ApiResult<Json<IdentifyResponse>> {
    if request.name.trim().is_empty() {
        return Err(ApiError::BadRequest("name must not be empty".to_string()));
    }
    if !request.confidence.is_finite() {
        return Err(ApiError::BadRequest("confidence must be a number".to_string()));
    }

    let detection = DetectionResult::host_supplied(request.name, request.confidence, request.concepts);
    respond(&state, detection, request.previous_session_id).await
}

async fn respond(
    state: &AppState,
    detection: DetectionResult,
    previous_session_id: Option<Uuid>,
) -> ApiResult<Json<IdentifyResponse>> {
    let analysis = state.engine.analyze(&detection);

    let session = QuizSession::new(analysis.category.to_string(), analysis.questions.clone());
    let quiz_session_id = Uuid::new_v4();
    {
        let mut sessions = state.quiz_sessions.write().await;
        if let Some(previous) = previous_session_id {
            if sessions.remove(&previous).is_some() {
                tracing::debug!("Discarded quiz session {}", previous);
            }
        }
        sessions.insert(quiz_session_id, session);
    }

    let sections = analysis
        .narrative
        .sections()
        .into_iter()
        .map(|s| SectionBody {
            kind: s.kind,
            text: s.text.to_string(),
        })
        .collect();
    let display_text = analysis.narrative.display_text();
    let bridge = analysis.narrative.bridge_payload();

    Ok(Json(IdentifyResponse {
        detection,
        analysis,
        sections,
        display_text,
        bridge,
        quiz_session_id,
    }))
}

/// Build identification routes
pub fn identify_routes() -> Router<AppState> {
    Router::new()
        .route("/identify", post(identify))
        .route("/resolve", post(resolve))
}
