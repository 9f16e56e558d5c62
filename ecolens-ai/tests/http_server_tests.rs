//! HTTP API integration tests
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use ecolens_ai::config::Thresholds;
use ecolens_ai::engine::NatureEngine;
use ecolens_ai::gateway::{ClassifierGateway, DetectionPipeline, GatewayError};
use ecolens_ai::quiz::SessionLimits;
use ecolens_ai::types::{DetectionResult, DetectionSource};
use ecolens_ai::AppState;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;

/// Gateway that always reports the same labels
struct FixedGateway {
    name: &'static str,
    confidence: f64,
    concepts: Vec<String>,
}

#[async_trait]
impl ClassifierGateway for FixedGateway {
    async fn classify(&self, _image_base64: &str) -> Result<DetectionResult, GatewayError> {
        Ok(DetectionResult::new(
            self.name,
            self.confidence,
            self.concepts.clone(),
            DetectionSource::GeneralClassifier,
        ))
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

fn test_state(gateway: Option<Arc<dyn ClassifierGateway>>) -> AppState {
    AppState::new(
        NatureEngine::default(),
        DetectionPipeline::new(gateway, Thresholds::default()),
    )
}

fn app(state: &AppState) -> Router {
    ecolens_ai::build_router(state.clone())
}

async fn send(state: &AppState, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health_endpoint() {
    let state = test_state(None);
    let (status, body) = send(&state, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["module"], "ecolens-ai");
    assert_eq!(body["status"], "degraded");
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_resolve_golden_retriever() {
    let state = test_state(None);
    let (status, body) = send(
        &state,
        "POST",
        "/resolve",
        Some(json!({ "name": "Golden retriever", "confidence": 0.92, "concepts": ["dog", "puppy"] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "dog");
    assert_eq!(body["narrative"]["mode"], "animal");
    assert_eq!(body["sections"].as_array().unwrap().len(), 2);
    assert_eq!(body["bridge"]["label"], "dog");
    assert_eq!(body["bridge"]["probability"], 0.92);
    assert!(body["questions"].as_array().unwrap().len() >= 2);
    assert!(body["quiz_session_id"].is_string());
}

#[tokio::test]
async fn test_resolve_rejects_empty_name() {
    let state = test_state(None);
    let (status, body) = send(
        &state,
        "POST",
        "/resolve",
        Some(json!({ "name": "  ", "confidence": 0.5 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_identify_uses_gateway() {
    let gateway = FixedGateway {
        name: "river",
        confidence: 0.88,
        concepts: vec!["plastic".into(), "water".into()],
    };
    let state = test_state(Some(Arc::new(gateway)));

    let (status, body) = send(
        &state,
        "POST",
        "/identify",
        Some(json!({ "image_base64": "AAAA" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["detection"]["source"], "general-classifier");
    assert_eq!(body["category"], "plastic");
    assert_eq!(body["narrative"]["mode"], "pollutant");
    assert!(body["narrative"]["warning"].is_string());
}

#[tokio::test]
async fn test_identify_without_classifier_uses_pixels() {
    let state = test_state(None);
    let (status, body) = send(
        &state,
        "POST",
        "/identify",
        Some(json!({ "pixels": [[34, 139, 34], [40, 150, 50]] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["detection"]["source"], "color-heuristic");
    assert_eq!(body["category"], "leaf");
}

#[tokio::test]
async fn test_identify_random_fallback_avoids_recent() {
    let state = test_state(None);
    for _ in 0..10 {
        let (status, body) = send(&state, "POST", "/identify", Some(json!({ "recent": "oak" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["detection"]["source"], "random-fallback");
        assert_ne!(body["category"], "oak");
    }
}

#[tokio::test]
async fn test_new_detection_discards_previous_session() {
    let state = test_state(None);
    let request = json!({ "name": "oak", "confidence": 0.8 });

    let (_, first) = send(&state, "POST", "/resolve", Some(request)).await;
    let first_id = first["quiz_session_id"].as_str().unwrap().to_string();

    let (_, _second) = send(
        &state,
        "POST",
        "/resolve",
        Some(json!({ "name": "rose", "confidence": 0.8, "previous_session_id": first_id })),
    )
    .await;

    let (status, _) = send(&state, "GET", &format!("/quiz/sessions/{}", first_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(state.quiz_sessions.read().await.len(), 1);
}

#[tokio::test]
async fn test_abandoned_sessions_stay_bounded() {
    let state = AppState::with_session_limits(
        NatureEngine::default(),
        DetectionPipeline::new(None, Thresholds::default()),
        SessionLimits {
            max_sessions: 8,
            ttl: Duration::from_secs(600),
        },
    );

    // Clients that never send previous_session_id
    let mut last_id = String::new();
    for _ in 0..100 {
        let (status, body) = send(
            &state,
            "POST",
            "/resolve",
            Some(json!({ "name": "oak", "confidence": 0.9 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        last_id = body["quiz_session_id"].as_str().unwrap().to_string();
    }

    let (_, health) = send(&state, "GET", "/health", None).await;
    assert_eq!(health["active_quiz_sessions"], 8);

    // The newest session is always kept
    let (status, _) = send(&state, "GET", &format!("/quiz/sessions/{}", last_id), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_categories() {
    let state = test_state(None);

    let (status, body) = send(&state, "GET", "/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["count"].as_u64().unwrap() > 80);

    let (status, body) = send(&state, "GET", "/categories/oak", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["key"], "oak");
    assert!(body["introduction"].is_string());

    let (status, body) = send(&state, "GET", "/categories/unicorn", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_quiz_questions_endpoint() {
    let state = test_state(None);
    let (status, body) = send(&state, "GET", "/quiz/plastic", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "plastic");
    let questions = body["questions"].as_array().unwrap();
    assert!(!questions.is_empty());
    assert_eq!(questions[0]["options"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_quiz_session_flow() {
    let state = test_state(None);

    let (status, created) = send(&state, "POST", "/quiz/sessions", Some(json!({ "category": "oak" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["state"], "not_started");
    let id = created["session_id"].as_str().unwrap().to_string();
    let total = created["total_questions"].as_u64().unwrap();

    // Answering before start is out of order
    let (status, _) = send(
        &state,
        "POST",
        &format!("/quiz/sessions/{}/answer", id),
        Some(json!({ "choice": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, started) = send(&state, "POST", &format!("/quiz/sessions/{}/start", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(started["state"], "in_progress");

    let (status, _) = send(
        &state,
        "POST",
        &format!("/quiz/sessions/{}/answer", id),
        Some(json!({ "choice": 9 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut last = Value::Null;
    for _ in 0..total {
        let (_, view) = send(&state, "GET", &format!("/quiz/sessions/{}", id), None).await;
        let correct = view["current_question"]["correct"].as_u64().unwrap();

        let (status, feedback) = send(
            &state,
            "POST",
            &format!("/quiz/sessions/{}/answer", id),
            Some(json!({ "choice": correct })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(feedback["correct"], true);
        assert!(feedback["feedback_delay_ms"].as_u64().unwrap() > 0);

        let (status, progress) =
            send(&state, "POST", &format!("/quiz/sessions/{}/advance", id), None).await;
        assert_eq!(status, StatusCode::OK);
        last = progress;
    }

    assert_eq!(last["status"], "complete");
    assert_eq!(last["summary"]["score"], total * 10);
    assert_eq!(last["summary"]["tier"], "expert");

    let (status, _) = send(&state, "DELETE", &format!("/quiz/sessions/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&state, "DELETE", &format!("/quiz/sessions/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
