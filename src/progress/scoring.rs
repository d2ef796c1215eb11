//! Mastery scoring
//!
//! Pure computation over progress records. Both event kinds follow the
//! same update rule:
//! - a quiz submission is correct when the selected option index matches
//!   the quiz's answer
//! - a flashcard review is correct when the self-assessed recall rating
//!   reaches the "knew it well" cutoff
//!
//! Every event bumps `total_attempts` and `times_reviewed`, stamps
//! `last_reviewed`, and recomputes `mastery_level` as the percentage of
//! attempts that were correct.

use chrono::Utc;

use super::models::{OverallProgress, UserProgress};
use crate::content::Topic;

/// Thresholds governing what counts as "correct" and "completed".
#[derive(Debug, Clone, Copy)]
pub struct ScoringPolicy {
    /// Lowest recall rating on the 1-5 scale that still counts as a
    /// correct answer.
    pub good_rating_cutoff: u32,
    /// Mastery percentage at which a topic counts as completed.
    pub completion_threshold: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            good_rating_cutoff: 4,
            completion_threshold: 80.0,
        }
    }
}

impl ScoringPolicy {
    /// Whether a recall rating counts as a correct answer.
    pub fn rating_counts_correct(&self, rating: u32) -> bool {
        rating >= self.good_rating_cutoff
    }
}

/// Round to the 2-decimal precision every persisted percentage carries.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage of attempts answered correctly.
pub fn mastery_level(correct_answers: u32, total_attempts: u32) -> f64 {
    if total_attempts == 0 {
        return 0.0;
    }
    round2(100.0 * correct_answers as f64 / total_attempts as f64)
}

/// Apply one attempt to a record: bump the counters, stamp the review
/// time, and recompute the mastery level.
pub fn record_attempt(progress: &mut UserProgress, correct: bool) {
    if correct {
        progress.correct_answers += 1;
    }
    progress.total_attempts += 1;
    progress.times_reviewed += 1;
    progress.last_reviewed = Some(Utc::now());
    progress.mastery_level = mastery_level(progress.correct_answers, progress.total_attempts);
}

/// Aggregate one user's mastery across the full topic list.
///
/// Topics without a progress record still count toward `total_topics`,
/// so an untouched topic drags the average down as an implicit zero.
/// With no topics at all the percentages cannot be formed and
/// `completion_percentage` is absent rather than zero.
pub fn overall_progress(
    topics: &[Topic],
    records: &[UserProgress],
    policy: &ScoringPolicy,
) -> OverallProgress {
    let total_topics = topics.len();
    if total_topics == 0 {
        return OverallProgress {
            total_topics: 0,
            completed_topics: 0,
            average_mastery: 0.0,
            completion_percentage: None,
        };
    }

    let mut total_mastery = 0.0;
    let mut completed_topics = 0;
    for topic in topics {
        if let Some(record) = records.iter().find(|p| p.topic_id == topic.id) {
            total_mastery += record.mastery_level;
            if record.mastery_level >= policy.completion_threshold {
                completed_topics += 1;
            }
        }
    }

    OverallProgress {
        total_topics,
        completed_topics,
        average_mastery: round2(total_mastery / total_topics as f64),
        completion_percentage: Some(round2(100.0 * completed_topics as f64 / total_topics as f64)),
    }
}
