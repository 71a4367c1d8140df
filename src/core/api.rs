//! HTTP API for the quiz
//!
//! Endpoints:
//! - GET /health - Health check
//! - GET /definition - Theme, axes, questions in displayed order
//! - GET /results - Distinct result types
//! - POST /session/new - Create session
//! - GET /session/{id} - Progress and reveal state
//! - DELETE /session/{id} - Drop a finished session
//! - POST /session/{id}/answer - Record an answer
//! - POST /session/{id}/reveal - Reveal the result (all answered)
//! - GET /session/{id}/result - Computed result (after reveal)
//! - POST /session/{id}/reset - Clear answers and reveal flag

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::core::quiz::{self, QuizOutcome};
use crate::types::{Axis, Choice, QuizDefinition, QuizSession, ResultProfile, SessionError};

/// One client's quiz in progress
#[derive(Debug)]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub state: QuizSession,
}

/// App state
pub struct AppState {
    pub definition: Arc<QuizDefinition>,
    pub sessions: RwLock<HashMap<String, Session>>,
    next_id: AtomicU64,
}

/// Create new session response
#[derive(Debug, Serialize)]
pub struct NewSessionResponse {
    pub session_id: String,
    pub total_questions: usize,
}

/// Session status response
#[derive(Debug, Serialize)]
pub struct SessionStatusResponse {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub answered: usize,
    pub total_questions: usize,
    pub progress: f64,
    pub complete: bool,
    pub revealed: bool,
}

/// Record answer request
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub question: usize,
    pub choice: Choice,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub fingerprint: String,
    pub sessions_active: usize,
}

/// Question as the client shows it
#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub index: usize,
    pub text: String,
    pub option_a: String,
    pub option_b: String,
}

/// Definition response
#[derive(Debug, Serialize)]
pub struct DefinitionResponse {
    pub theme: String,
    pub axes: Vec<Axis>,
    pub questions: Vec<QuestionView>,
}

/// Create the API router
pub fn create_router(definition: Arc<QuizDefinition>) -> Router {
    let state = Arc::new(AppState {
        definition,
        sessions: RwLock::new(HashMap::new()),
        next_id: AtomicU64::new(1),
    });

    Router::new()
        .route("/health", get(health))
        .route("/definition", get(get_definition))
        .route("/results", get(list_results))
        .route("/session/new", post(create_session))
        .route("/session/:id", get(get_session).delete(delete_session))
        .route("/session/:id/answer", post(record_answer))
        .route("/session/:id/reveal", post(reveal))
        .route("/session/:id/result", get(get_result))
        .route("/session/:id/reset", post(reset_session))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let sessions = state.sessions.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        fingerprint: state.definition.fingerprint.clone(),
        sessions_active: sessions.len(),
    })
}

/// Quiz content with options in displayed order
async fn get_definition(State(state): State<Arc<AppState>>) -> Json<DefinitionResponse> {
    let def = &state.definition;
    let questions = def
        .questions
        .iter()
        .enumerate()
        .map(|(index, q)| {
            let (first, second) = q.displayed_options();
            QuestionView {
                index,
                text: q.text.clone(),
                option_a: first.to_string(),
                option_b: second.to_string(),
            }
        })
        .collect();

    Json(DefinitionResponse {
        theme: def.theme.clone(),
        axes: def.axes.clone(),
        questions,
    })
}

/// Distinct result types
async fn list_results(State(state): State<Arc<AppState>>) -> Json<Vec<ResultProfile>> {
    Json(
        quiz::list_distinct_results(&state.definition)
            .into_iter()
            .cloned()
            .collect(),
    )
}

/// Create new session
async fn create_session(State(state): State<Arc<AppState>>) -> Json<NewSessionResponse> {
    let seq = state.next_id.fetch_add(1, Ordering::Relaxed);
    let session_id = generate_session_id(seq);

    let session = Session {
        id: session_id.clone(),
        created_at: Utc::now(),
        state: QuizSession::new(),
    };

    let mut sessions = state.sessions.write().await;
    sessions.insert(session_id.clone(), session);
    info!(session = %session_id, "session created");

    Json(NewSessionResponse {
        session_id,
        total_questions: state.definition.question_count(),
    })
}

/// Get session status
async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionStatusResponse>, StatusCode> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(status(session, &state.definition)))
}

/// Remove a session and its answers
async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> StatusCode {
    let mut sessions = state.sessions.write().await;
    match sessions.remove(&id) {
        Some(_) => {
            info!(session = %id, "session deleted");
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

/// Record or replace one answer
async fn record_answer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<SessionStatusResponse>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    quiz::record_answer(&state.definition, &mut session.state, req.question, req.choice)
        .map_err(session_status_code)?;

    Ok(Json(status(session, &state.definition)))
}

/// Second step of the reveal gate
async fn reveal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionStatusResponse>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    session
        .state
        .request_reveal(state.definition.question_count())
        .map_err(session_status_code)?;

    Ok(Json(status(session, &state.definition)))
}

/// Result for a revealed session, computed from current answers
async fn get_result(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<QuizOutcome>, StatusCode> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;

    if !session.state.is_revealed() {
        return Err(StatusCode::CONFLICT);
    }

    let outcome = quiz::compute_result(&state.definition, session.state.answers()).map_err(|e| {
        warn!(session = %id, error = %e, "result computation failed");
        StatusCode::CONFLICT
    })?;
    info!(session = %id, key = %outcome.sign_key, result = %outcome.profile.name, "result served");

    Ok(Json(outcome))
}

/// Clear answers and reveal flag together
async fn reset_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionStatusResponse>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    quiz::reset(&mut session.state);

    Ok(Json(status(session, &state.definition)))
}

fn status(session: &Session, definition: &QuizDefinition) -> SessionStatusResponse {
    let total = definition.question_count();
    SessionStatusResponse {
        session_id: session.id.clone(),
        created_at: session.created_at,
        answered: session.state.answered(),
        total_questions: total,
        progress: session.state.progress(total),
        complete: session.state.is_complete(total),
        revealed: session.state.is_revealed(),
    }
}

fn session_status_code(err: SessionError) -> StatusCode {
    match err {
        SessionError::QuestionOutOfRange { .. } | SessionError::InvalidChoice(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        SessionError::Incomplete { .. } => StatusCode::CONFLICT,
    }
}

/// Generate session ID
fn generate_session_id(seq: u64) -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("session_{:x}_{}", nanos as u64, seq)
}

/// Run the API server
pub async fn run_server(
    addr: &str,
    definition: Arc<QuizDefinition>,
) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(definition);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "quiz API listening");
    println!("Persona Quiz API running on {}", addr);
    println!("  GET  /health              - Health check");
    println!("  GET  /definition          - Quiz content");
    println!("  GET  /results             - All result types");
    println!("  POST /session/new         - Create session");
    println!("  GET  /session/:id         - Progress");
    println!("  DELETE /session/:id       - Drop session");
    println!("  POST /session/:id/answer  - Record answer");
    println!("  POST /session/:id/reveal  - Reveal result");
    println!("  GET  /session/:id/result  - Get result");
    println!("  POST /session/:id/reset   - Start over");
    axum::serve(listener, router).await?;
    Ok(())
}
