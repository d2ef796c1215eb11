//! Topic, quiz, and flashcard service with file-backed mastery tracking.
//!
//! - [`content`]: read-only authored collections (topics, quizzes, flashcards)
//! - [`progress`]: per-topic mastery records, their storage, and scoring
//! - [`api`]: request handlers mapping REST calls onto the stores
//! - [`server`]: embedded HTTP server lifecycle

pub mod api;
pub mod config;
pub mod content;
pub mod progress;
pub mod server;

use std::path::PathBuf;

use content::ContentStorage;
use progress::{ProgressStorage, ProgressStoreError, ScoringPolicy};

/// Shared state handed to every request handler.
pub struct AppState {
    pub content: ContentStorage,
    pub progress: ProgressStorage,
    pub scoring: ScoringPolicy,
}

impl AppState {
    /// Wire the stores up against one data directory.
    pub fn new(data_dir: PathBuf) -> Result<Self, ProgressStoreError> {
        let content = ContentStorage::new(data_dir.clone());
        let progress = ProgressStorage::new(data_dir)?;

        Ok(Self {
            content,
            progress,
            scoring: ScoringPolicy::default(),
        })
    }
}
