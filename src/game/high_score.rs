use crate::storage::interface::HighScoreStore;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Remembers the best total and writes improvements to the store in the background.
pub struct HighScoreTracker {
    store: Arc<dyn HighScoreStore>,
    best: f64,
    pending_save: Option<JoinHandle<()>>,
}

impl HighScoreTracker {
    pub async fn load(store: Arc<dyn HighScoreStore>) -> Self {
        let best = store.load().await;
        tracing::info!(task = "high_score", best, "Loaded the high score.");
        Self {
            store,
            best,
            pending_save: None,
        }
    }

    pub fn best(&self) -> f64 {
        self.best
    }

    /// Records a finished session's total. Returns whether it beat the previous best.
    ///
    /// The write is spawned on the current tokio runtime and not waited for. Writes are
    /// chained so that a slow earlier save can never land after a later one.
    pub fn record(&mut self, total: f64) -> bool {
        if total <= self.best {
            return false;
        }
        self.best = total;
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                tracing::warn!(
                    task = "high_score",
                    total,
                    "No async runtime available, the high score won't be saved."
                );
                return true;
            }
        };
        let store = Arc::clone(&self.store);
        let previous_save = self.pending_save.take();
        self.pending_save = Some(runtime.spawn(async move {
            if let Some(previous_save) = previous_save {
                let _ = previous_save.await;
            }
            store.save(total).await;
        }));
        true
    }

    /// Waits for the last spawned write, if any.
    pub async fn flush(&mut self) {
        if let Some(pending_save) = self.pending_save.take() {
            if let Err(err) = pending_save.await {
                tracing::warn!(task = "high_score", error = %err, "High score save task failed.");
            }
        }
    }
}
