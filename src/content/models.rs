//! Data models for the authored learning content

use serde::{Deserialize, Serialize};

/// A unit of learning content grouping quizzes and flashcards.
///
/// Topics are authored offline and loaded at request time; the application
/// never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Position in the curriculum; listings sort on this ascending.
    pub order: i32,
    pub subtopics: Vec<String>,
    pub difficulty: String,
}

/// A multiple-choice question belonging to a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub topic_id: String,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options` of the right answer.
    pub correct_answer: u32,
    pub explanation: String,
    pub difficulty: String,
}

/// A front/back recall card belonging to a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: String,
    pub topic_id: String,
    pub front: String,
    pub back: String,
    pub difficulty: String,
}
