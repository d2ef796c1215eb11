//! Handlers for the topic endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::content::Topic;
use crate::AppState;

use super::ApiResult;

/// Wire shape for `GET /api/topics`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TopicList {
    pub topics: Vec<Topic>,
}

/// Lists every topic in curriculum order.
pub async fn list_topics(State(state): State<Arc<AppState>>) -> ApiResult<Json<TopicList>> {
    let topics = state.content.list_topics()?;
    Ok(Json(TopicList { topics }))
}

/// Returns a single topic, or 404 when the id is unknown.
pub async fn get_topic(
    State(state): State<Arc<AppState>>,
    Path(topic_id): Path<String>,
) -> ApiResult<Json<Topic>> {
    let topic = state.content.get_topic(&topic_id)?;
    Ok(Json(topic))
}
