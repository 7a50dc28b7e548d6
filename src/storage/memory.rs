use crate::storage::interface::HighScoreStore;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryHighScoreStore {
    storage: Arc<RwLock<Option<f64>>>,
    saves: Arc<RwLock<Vec<f64>>>,
}

impl InMemoryHighScoreStore {
    pub fn with_high_score(score: f64) -> Self {
        Self {
            storage: Arc::new(RwLock::new(Some(score))),
            saves: Arc::default(),
        }
    }

    /// Every score passed to `save`, oldest first.
    pub async fn saves(&self) -> Vec<f64> {
        self.saves.read().await.clone()
    }
}

#[async_trait]
impl HighScoreStore for InMemoryHighScoreStore {
    async fn load(&self) -> f64 {
        self.storage.read().await.unwrap_or(0.0)
    }

    async fn save(&self, score: f64) {
        *self.storage.write().await = Some(score);
        self.saves.write().await.push(score);
    }
}
