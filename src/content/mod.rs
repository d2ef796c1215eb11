//! Authored learning content
//!
//! This module owns the read-only side of the data directory:
//! - Topics, the curriculum units
//! - Quizzes, multiple-choice questions attached to topics
//! - Flashcards, recall cards attached to topics
//!
//! Content is authored as JSON files and never written by the application.

pub mod models;
pub mod storage;

pub use models::*;
pub use storage::{ContentStorage, ContentStoreError};
