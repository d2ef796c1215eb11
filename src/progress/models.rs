//! Data models for per-topic mastery tracking

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity recorded when a request names no other user.
pub const DEFAULT_USER_ID: &str = "default_user";

/// Accumulated mastery state for one (user, topic) pair.
///
/// At most one record exists per pair. Records are created lazily on the
/// first quiz submission or flashcard review touching a topic, updated in
/// place afterwards, and never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProgress {
    #[serde(default = "default_user_id")]
    pub user_id: String,
    pub topic_id: String,
    /// Percentage of attempts answered correctly, 0 to 100.
    #[serde(default)]
    pub mastery_level: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<DateTime<Utc>>,
    #[serde(default)]
    pub times_reviewed: u32,
    #[serde(default)]
    pub correct_answers: u32,
    #[serde(default)]
    pub total_attempts: u32,
}

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

impl UserProgress {
    /// A fresh record with every counter at zero.
    pub fn new(user_id: &str, topic_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            topic_id: topic_id.to_string(),
            mastery_level: 0.0,
            last_reviewed: None,
            times_reviewed: 0,
            correct_answers: 0,
            total_attempts: 0,
        }
    }
}

/// Mastery aggregated across the whole curriculum for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallProgress {
    pub total_topics: usize,
    pub completed_topics: usize,
    pub average_mastery: f64,
    /// Share of topics at or past the completion threshold. Absent when
    /// the curriculum has no topics at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_percentage: Option<f64>,
}
