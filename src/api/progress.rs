//! Handlers for the progress reporting endpoints

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::progress::{scoring, OverallProgress, UserProgress, DEFAULT_USER_ID};
use crate::AppState;

use super::ApiResult;

/// Query parameters naming the user, defaulting to the single implicit
/// one.
#[derive(Debug, Deserialize)]
pub struct UserFilter {
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

/// Wire shape for `GET /api/progress`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressReport {
    pub progress: Vec<UserProgress>,
    pub overall: OverallProgress,
}

/// Reports a user's per-topic records plus the curriculum-wide rollup.
pub async fn get_progress(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<UserFilter>,
) -> ApiResult<Json<ProgressReport>> {
    let records = state.progress.list_for_user(&filter.user_id)?;
    let topics = state.content.list_topics()?;
    let overall = scoring::overall_progress(&topics, &records, &state.scoring);

    Ok(Json(ProgressReport {
        progress: records,
        overall,
    }))
}

/// Returns a user's record for one topic, or a zeroed record when the
/// topic has never been attempted. Never a 404.
pub async fn get_topic_progress(
    State(state): State<Arc<AppState>>,
    Path(topic_id): Path<String>,
    Query(filter): Query<UserFilter>,
) -> ApiResult<Json<UserProgress>> {
    let progress = state
        .progress
        .get(&topic_id, &filter.user_id)?
        .unwrap_or_else(|| UserProgress::new(&filter.user_id, &topic_id));
    Ok(Json(progress))
}
