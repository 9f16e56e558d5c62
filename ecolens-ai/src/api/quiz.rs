//! Quiz endpoints
//!
//! Sessions live in [`AppState::quiz_sessions`]; the state machine itself is
//! [`QuizSession`]. Out-of-order actions map to 409, bad choices to 400.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::quiz::{
    AnswerFeedback, QuizProgress, QuizQuestion, QuizSession, QuizState, QuizSummary,
    FEEDBACK_DELAY,
};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct QuestionList {
    pub category: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub choice: usize,
}

/// Snapshot of one session
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub category: String,
    pub state: QuizState,
    pub score: u32,
    pub current_index: usize,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<QuizQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<QuizSummary>,
}

impl SessionView {
    fn of(session_id: Uuid, session: &QuizSession) -> Self {
        Self {
            session_id,
            category: session.category().to_string(),
            state: session.state(),
            score: session.score(),
            current_index: session.current_index(),
            total_questions: session.questions().len(),
            current_question: session.current_question().cloned(),
            summary: (session.state() == QuizState::Complete).then(|| session.summary()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    #[serde(flatten)]
    pub feedback: AnswerFeedback,
    /// How long to show the feedback before calling advance
    pub feedback_delay_ms: u64,
}

/// GET /quiz/:category
pub async fn get_questions(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<QuestionList> {
    let key = state.engine.knowledge_base().parse_key(&category);
    let questions = state.engine.quiz().generate_questions(&key);
    Json(QuestionList {
        category: key.to_string(),
        questions,
    })
}

/// POST /quiz/sessions
pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> ApiResult<(StatusCode, Json<SessionView>)> {
    if request.category.trim().is_empty() {
        return Err(ApiError::BadRequest("category must not be empty".to_string()));
    }

    let key = state.engine.knowledge_base().parse_key(&request.category);
    let questions = state.engine.quiz().generate_questions(&key);
    let session = QuizSession::new(key.to_string(), questions);

    let session_id = Uuid::new_v4();
    let view = SessionView::of(session_id, &session);
    state.quiz_sessions.write().await.insert(session_id, session);

    tracing::debug!("Created quiz session {} for '{}'", session_id, key);
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /quiz/sessions/:id
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<Json<SessionView>> {
    let sessions = state.quiz_sessions.read().await;
    let session = sessions.get(&session_id).ok_or_else(|| not_found(session_id))?;
    Ok(Json(SessionView::of(session_id, session)))
}

/// POST /quiz/sessions/:id/start
pub async fn start_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<Json<SessionView>> {
    let mut sessions = state.quiz_sessions.write().await;
    let session = sessions.get_mut(&session_id).ok_or_else(|| not_found(session_id))?;
    session.start()?;
    Ok(Json(SessionView::of(session_id, session)))
}

/// POST /quiz/sessions/:id/answer
pub async fn answer_question(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AnswerRequest>,
) -> ApiResult<Json<AnswerResponse>> {
    let mut sessions = state.quiz_sessions.write().await;
    let session = sessions.get_mut(&session_id).ok_or_else(|| not_found(session_id))?;
    let feedback = session.answer(request.choice)?;
    Ok(Json(AnswerResponse {
        feedback,
        feedback_delay_ms: FEEDBACK_DELAY.as_millis() as u64,
    }))
}

/// POST /quiz/sessions/:id/advance
pub async fn advance_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<Json<QuizProgress>> {
    let mut sessions = state.quiz_sessions.write().await;
    let session = sessions.get_mut(&session_id).ok_or_else(|| not_found(session_id))?;
    Ok(Json(session.advance()?))
}

/// DELETE /quiz/sessions/:id
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state
        .quiz_sessions
        .write()
        .await
        .remove(&session_id)
        .ok_or_else(|| not_found(session_id))?;
    Ok(StatusCode::NO_CONTENT)
}

fn not_found(session_id: Uuid) -> ApiError {
    ApiError::NotFound(format!("quiz session {}", session_id))
}

/// Build quiz routes
pub fn quiz_routes() -> Router<AppState> {
    Router::new()
        .route("/quiz/sessions", post(create_session))
        .route("/quiz/sessions/:id", get(get_session).delete(delete_session))
        .route("/quiz/sessions/:id/start", post(start_session))
        .route("/quiz/sessions/:id/answer", post(answer_question))
        .route("/quiz/sessions/:id/advance", post(advance_session))
        .route("/quiz/:category", get(get_questions))
}
