//! Handlers for flashcard listing and review

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::content::Flashcard;
use crate::progress::{scoring, UserProgress, DEFAULT_USER_ID};
use crate::AppState;

use super::ApiResult;

/// Query parameters for `GET /api/flashcards`.
#[derive(Debug, Deserialize)]
pub struct FlashcardFilter {
    pub topic_id: Option<String>,
}

/// Wire shape for `GET /api/flashcards`.
#[derive(Debug, Serialize, Deserialize)]
pub struct FlashcardList {
    pub flashcards: Vec<Flashcard>,
}

/// Body of `POST /api/flashcards/review`.
#[derive(Debug, Serialize, Deserialize)]
pub struct FlashcardReview {
    pub flashcard_id: String,
    pub topic_id: String,
    /// Self-assessed recall quality, 1 (blank) to 5 (perfect).
    pub rating: u32,
}

/// Outcome of a recorded review.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub mastery_level: f64,
    pub times_reviewed: u32,
}

/// Lists flashcards, optionally restricted to one topic.
pub async fn list_flashcards(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<FlashcardFilter>,
) -> ApiResult<Json<FlashcardList>> {
    let flashcards = state.content.list_flashcards(filter.topic_id.as_deref())?;
    Ok(Json(FlashcardList { flashcards }))
}

/// Records a self-rated recall and folds it into the topic's mastery.
///
/// The card itself is never looked up, so an unknown `flashcard_id`
/// still counts as a review of its topic.
pub async fn review_flashcard(
    State(state): State<Arc<AppState>>,
    Json(review): Json<FlashcardReview>,
) -> ApiResult<Json<ReviewOutcome>> {
    let correct = state.scoring.rating_counts_correct(review.rating);

    let mut progress = state
        .progress
        .get(&review.topic_id, DEFAULT_USER_ID)?
        .unwrap_or_else(|| UserProgress::new(DEFAULT_USER_ID, &review.topic_id));
    scoring::record_attempt(&mut progress, correct);
    let mastery_level = progress.mastery_level;
    let times_reviewed = progress.times_reviewed;
    state.progress.upsert(progress)?;

    Ok(Json(ReviewOutcome {
        mastery_level,
        times_reviewed,
    }))
}
