//! Read-only storage over the authored content collections
//!
//! Layout under the data directory:
//! ```text
//! data/
//! ├── topics.json      # {"topics": [...]}
//! ├── quizzes.json     # {"quizzes": [...]}
//! └── flashcards.json  # {"flashcards": [...]}
//! ```
//!
//! Every call re-reads and re-scans the backing file. The collections are
//! small reference data, so there is deliberately no index and no cache.
//! An absent file is an empty collection, not an error.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use super::models::{Flashcard, Quiz, Topic};

#[derive(Error, Debug)]
pub enum ContentStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Topic not found: {0}")]
    TopicNotFound(String),

    #[error("Quiz not found: {0}")]
    QuizNotFound(String),
}

pub type Result<T> = std::result::Result<T, ContentStoreError>;

/// On-disk document shapes. Each collection file is an object wrapping a
/// single list; a missing key reads as an empty collection.
#[derive(Debug, Default, Deserialize)]
struct TopicsDoc {
    #[serde(default)]
    topics: Vec<Topic>,
}

#[derive(Debug, Default, Deserialize)]
struct QuizzesDoc {
    #[serde(default)]
    quizzes: Vec<Quiz>,
}

#[derive(Debug, Default, Deserialize)]
struct FlashcardsDoc {
    #[serde(default)]
    flashcards: Vec<Flashcard>,
}

/// Read-only accessor over topics, quizzes, and flashcards.
pub struct ContentStorage {
    data_dir: PathBuf,
}

impl ContentStorage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn topics_path(&self) -> PathBuf {
        self.data_dir.join("topics.json")
    }

    fn quizzes_path(&self) -> PathBuf {
        self.data_dir.join("quizzes.json")
    }

    fn flashcards_path(&self) -> PathBuf {
        self.data_dir.join("flashcards.json")
    }

    /// List all topics in curriculum order.
    pub fn list_topics(&self) -> Result<Vec<Topic>> {
        let path = self.topics_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let doc: TopicsDoc = serde_json::from_str(&content)?;

        let mut topics = doc.topics;
        topics.sort_by_key(|t| t.order);
        Ok(topics)
    }

    /// Get a specific topic.
    pub fn get_topic(&self, topic_id: &str) -> Result<Topic> {
        self.list_topics()?
            .into_iter()
            .find(|t| t.id == topic_id)
            .ok_or_else(|| ContentStoreError::TopicNotFound(topic_id.to_string()))
    }

    /// List quizzes, optionally filtered by topic. An empty id means no
    /// filter, same as an absent one.
    pub fn list_quizzes(&self, topic_id: Option<&str>) -> Result<Vec<Quiz>> {
        let path = self.quizzes_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let doc: QuizzesDoc = serde_json::from_str(&content)?;

        let mut quizzes = doc.quizzes;
        if let Some(topic_id) = topic_id.filter(|t| !t.is_empty()) {
            quizzes.retain(|q| q.topic_id == topic_id);
        }
        Ok(quizzes)
    }

    /// Get a specific quiz.
    pub fn get_quiz(&self, quiz_id: &str) -> Result<Quiz> {
        self.list_quizzes(None)?
            .into_iter()
            .find(|q| q.id == quiz_id)
            .ok_or_else(|| ContentStoreError::QuizNotFound(quiz_id.to_string()))
    }

    /// List flashcards, optionally filtered by topic. An empty id means no
    /// filter, same as an absent one.
    pub fn list_flashcards(&self, topic_id: Option<&str>) -> Result<Vec<Flashcard>> {
        let path = self.flashcards_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let doc: FlashcardsDoc = serde_json::from_str(&content)?;

        let mut flashcards = doc.flashcards;
        if let Some(topic_id) = topic_id.filter(|t| !t.is_empty()) {
            flashcards.retain(|f| f.topic_id == topic_id);
        }
        Ok(flashcards)
    }
}
