//! Progress storage implementation
//!
//! Every mastery record across all users lives in a single `mastery.json`
//! under the data directory, wrapped as `{"progress": [...]}`. Writes load
//! the full collection, mutate it, and rewrite the whole file through a
//! temp file renamed into place, so a crashed write never leaves a
//! half-written document behind.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::UserProgress;

#[derive(Error, Debug)]
pub enum ProgressStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProgressStoreError>;

/// On-disk document shape for `mastery.json`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct MasteryDoc {
    #[serde(default)]
    progress: Vec<UserProgress>,
}

/// Read/write store for mastery records.
pub struct ProgressStorage {
    data_dir: PathBuf,
}

impl ProgressStorage {
    /// Create a progress store rooted at `data_dir`, creating the
    /// directory if needed.
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn mastery_path(&self) -> PathBuf {
        self.data_dir.join("mastery.json")
    }

    /// Load every stored record, across all users.
    fn load_all(&self) -> Result<Vec<UserProgress>> {
        let path = self.mastery_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let doc: MasteryDoc = serde_json::from_str(&content)?;
        Ok(doc.progress)
    }

    /// List one user's records.
    pub fn list_for_user(&self, user_id: &str) -> Result<Vec<UserProgress>> {
        let records = self.load_all()?;
        Ok(records.into_iter().filter(|p| p.user_id == user_id).collect())
    }

    /// Get one user's record for a topic, if any.
    pub fn get(&self, topic_id: &str, user_id: &str) -> Result<Option<UserProgress>> {
        let records = self.list_for_user(user_id)?;
        Ok(records.into_iter().find(|p| p.topic_id == topic_id))
    }

    /// Insert or replace the record matching (user_id, topic_id).
    pub fn upsert(&self, progress: UserProgress) -> Result<()> {
        let mut records = self.load_all()?;

        match records
            .iter_mut()
            .find(|p| p.topic_id == progress.topic_id && p.user_id == progress.user_id)
        {
            Some(existing) => *existing = progress,
            None => records.push(progress),
        }

        self.save_all(records)
    }

    /// Rewrite the whole collection atomically.
    fn save_all(&self, records: Vec<UserProgress>) -> Result<()> {
        let json = serde_json::to_string_pretty(&MasteryDoc { progress: records })?;
        let tmp_path = self.data_dir.join("mastery.json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, self.mastery_path())?;
        Ok(())
    }
}
