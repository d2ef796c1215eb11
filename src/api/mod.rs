//! HTTP API surface
//!
//! Stateless request handlers translating REST calls into content,
//! progress, and scoring operations. Failures serialize as
//! `{"error": message}` with the matching status code.

pub mod flashcards;
pub mod progress;
pub mod quizzes;
pub mod topics;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::content::ContentStoreError;
use crate::progress::ProgressStoreError;
use crate::AppState;

/// Error returned by any handler.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Internal(String),
}

/// Wire shape for error responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<ContentStoreError> for ApiError {
    fn from(err: ContentStoreError) -> Self {
        match err {
            ContentStoreError::TopicNotFound(_) => Self::NotFound("Topic not found".to_string()),
            ContentStoreError::QuizNotFound(_) => Self::NotFound("Quiz not found".to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<ProgressStoreError> for ApiError {
    fn from(err: ProgressStoreError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message),
            Self::Internal(message) => {
                log::error!("Request failed: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Build the full API router over shared application state.
///
/// The browser front end may live on another origin, so CORS is wide
/// open.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/topics", get(topics::list_topics))
        .route("/api/topics/{topic_id}", get(topics::get_topic))
        .route("/api/quizzes", get(quizzes::list_quizzes))
        .route("/api/quizzes/submit", post(quizzes::submit_quiz))
        .route("/api/flashcards", get(flashcards::list_flashcards))
        .route("/api/flashcards/review", post(flashcards::review_flashcard))
        .route("/api/progress", get(progress::get_progress))
        .route("/api/progress/{topic_id}", get(progress::get_topic_progress))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
