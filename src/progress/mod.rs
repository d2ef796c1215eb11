//! Per-topic mastery tracking
//!
//! This module provides:
//! - Progress records keyed by (user, topic), persisted in one JSON file
//! - Scoring rules turning quiz and flashcard events into mastery updates
//! - Curriculum-wide aggregates

pub mod models;
pub mod scoring;
pub mod storage;

pub use models::*;
pub use scoring::ScoringPolicy;
pub use storage::{ProgressStorage, ProgressStoreError};
