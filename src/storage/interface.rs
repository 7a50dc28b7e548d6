use async_trait::async_trait;

/// Where the best session total survives between runs.
///
/// Implementations swallow their own failures: a store that cannot be read reports `0.0`,
/// a store that cannot be written simply keeps the old value.
#[async_trait]
pub trait HighScoreStore: Send + Sync {
    async fn load(&self) -> f64;

    async fn save(&self, score: f64);
}
