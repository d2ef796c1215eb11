//! Handlers for quiz listing and submission

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::content::Quiz;
use crate::progress::{scoring, UserProgress, DEFAULT_USER_ID};
use crate::AppState;

use super::ApiResult;

/// Query parameters for `GET /api/quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizFilter {
    pub topic_id: Option<String>,
}

/// Wire shape for `GET /api/quizzes`.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizList {
    pub quizzes: Vec<Quiz>,
}

/// Body of `POST /api/quizzes/submit`.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub quiz_id: String,
    /// Index of the option the user picked.
    pub selected_answer: u32,
    pub topic_id: String,
}

/// Outcome of a graded submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizResult {
    pub correct: bool,
    pub explanation: String,
    pub mastery_level: f64,
}

/// Lists quizzes, optionally restricted to one topic.
pub async fn list_quizzes(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<QuizFilter>,
) -> ApiResult<Json<QuizList>> {
    let quizzes = state.content.list_quizzes(filter.topic_id.as_deref())?;
    Ok(Json(QuizList { quizzes }))
}

/// Grades a submitted answer and folds it into the topic's mastery.
///
/// Returns 404 when the quiz id is unknown. The progress record is
/// created on the spot if the topic has never been attempted.
pub async fn submit_quiz(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<QuizSubmission>,
) -> ApiResult<Json<QuizResult>> {
    let quiz = state.content.get_quiz(&submission.quiz_id)?;
    let correct = submission.selected_answer == quiz.correct_answer;

    let mut progress = state
        .progress
        .get(&submission.topic_id, DEFAULT_USER_ID)?
        .unwrap_or_else(|| UserProgress::new(DEFAULT_USER_ID, &submission.topic_id));
    scoring::record_attempt(&mut progress, correct);
    let mastery_level = progress.mastery_level;
    state.progress.upsert(progress)?;

    Ok(Json(QuizResult {
        correct,
        explanation: quiz.explanation,
        mastery_level,
    }))
}
