use crate::storage::file::FileHighScoreStore;
use crate::storage::interface::HighScoreStore;
use crate::storage::memory::InMemoryHighScoreStore;
use std::path::PathBuf;
use uuid::Uuid;

fn scratch_path() -> PathBuf {
    std::env::temp_dir().join(format!("eratosthenes-solo-{}.json", Uuid::new_v4()))
}

#[tokio::test]
async fn test_missing_file_means_zero() {
    let store = FileHighScoreStore::new(scratch_path());
    assert_eq!(store.load().await, 0.0);
}

#[tokio::test]
async fn test_file_round_trip() {
    let path = scratch_path();
    let store = FileHighScoreStore::new(&path);

    store.save(7321.5).await;

    assert_eq!(store.load().await, 7321.5);
    assert_eq!(FileHighScoreStore::new(&path).load().await, 7321.5);
    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn test_corrupt_file_means_zero() {
    let path = scratch_path();
    tokio::fs::write(&path, b"definitely not json")
        .await
        .expect("Failed to write scratch file.");

    assert_eq!(FileHighScoreStore::new(&path).load().await, 0.0);
    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn test_missing_key_means_zero() {
    let path = scratch_path();
    tokio::fs::write(&path, br#"{"volume": 0.5}"#)
        .await
        .expect("Failed to write scratch file.");
    let store = FileHighScoreStore::new(&path);

    assert_eq!(store.load().await, 0.0);

    store.save(12.0).await;
    let raw = tokio::fs::read_to_string(&path)
        .await
        .expect("Failed to read scratch file.");
    let entries: serde_json::Value = serde_json::from_str(&raw).expect("Saved file isn't JSON.");
    assert_eq!(entries["volume"], 0.5);
    assert_eq!(entries["highscore"], 12.0);
    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn test_unwritable_location_is_not_fatal() {
    let store = FileHighScoreStore::new(scratch_path().join("nested").join("highscore.json"));

    store.save(100.0).await;

    assert_eq!(store.load().await, 0.0);
}

#[tokio::test]
async fn test_in_memory_store_records_saves() {
    let store = InMemoryHighScoreStore::default();
    assert_eq!(store.load().await, 0.0);

    store.save(10.0).await;
    store.save(20.0).await;

    assert_eq!(store.load().await, 20.0);
    assert_eq!(store.saves().await, vec![10.0, 20.0]);
    assert_eq!(
        InMemoryHighScoreStore::with_high_score(4000.0).load().await,
        4000.0
    );
}
