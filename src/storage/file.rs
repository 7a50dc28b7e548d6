use crate::storage::consts::HIGH_SCORE_KEY;
use crate::storage::interface::HighScoreStore;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::io;
use std::path::{Path, PathBuf};

/// Keeps the high score in a small JSON object file, under the `"highscore"` key.
#[derive(Clone, Debug)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> io::Result<Map<String, Value>> {
        let raw = tokio::fs::read(&self.path).await?;
        serde_json::from_slice(&raw).map_err(io::Error::from)
    }

    async fn write_entries(&self, entries: &Map<String, Value>) -> io::Result<()> {
        let raw = serde_json::to_vec_pretty(entries)?;
        let mut tmp_path = self.path.clone().into_os_string();
        tmp_path.push(".tmp");
        tokio::fs::write(&tmp_path, raw).await?;
        tokio::fs::rename(&tmp_path, &self.path).await
    }
}

#[async_trait]
impl HighScoreStore for FileHighScoreStore {
    async fn load(&self) -> f64 {
        let entries = match self.read_entries().await {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(task = "high_score", path = %self.path.display(), "No high score saved yet.");
                return 0.0;
            }
            Err(err) => {
                tracing::warn!(
                    task = "high_score",
                    path = %self.path.display(),
                    error = %err,
                    "Failed to read the high score, starting from zero."
                );
                return 0.0;
            }
        };
        match entries.get(HIGH_SCORE_KEY).and_then(Value::as_f64) {
            Some(score) if score.is_finite() => score,
            Some(_) | None => {
                tracing::warn!(
                    task = "high_score",
                    path = %self.path.display(),
                    "The high score file has no usable `{}` entry.",
                    HIGH_SCORE_KEY
                );
                0.0
            }
        }
    }

    async fn save(&self, score: f64) {
        // Other keys in the file are left alone.
        let mut entries = self.read_entries().await.unwrap_or_default();
        entries.insert(HIGH_SCORE_KEY.to_string(), Value::from(score));
        match self.write_entries(&entries).await {
            Ok(()) => tracing::info!(task = "high_score", score, "Saved a new high score."),
            Err(err) => tracing::warn!(
                task = "high_score",
                path = %self.path.display(),
                error = %err,
                "Failed to save the high score."
            ),
        }
    }
}
