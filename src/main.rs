use clap::Parser;
use eratosthenes_solo::cli::Args;
use eratosthenes_solo::console::{self, ConsoleEvents};
use eratosthenes_solo::game::high_score::HighScoreTracker;
use eratosthenes_solo::game::{GameConfig, RoundEngine};
use eratosthenes_solo::locations::{catalog, pool::LocationPool};
use eratosthenes_solo::logging;
use eratosthenes_solo::storage::file::FileHighScoreStore;
use std::sync::Arc;
use tokio::io::BufReader;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init(&args);

    let locations = catalog::load(&args.locations).expect("Failed to load the locations file.");
    tracing::info!(
        task = "startup",
        locations = locations.len(),
        path = %args.locations.display(),
        "Loaded the locations catalog."
    );
    let pool = match args.seed {
        Some(seed) => LocationPool::with_seed(locations, seed),
        None => LocationPool::new(locations),
    };
    let store = Arc::new(FileHighScoreStore::new(&args.high_score_file));
    let high_score = HighScoreTracker::load(store).await;
    let config = GameConfig {
        rounds_per_game: args.rounds,
        ..GameConfig::default()
    };
    let mut engine = RoundEngine::new(config, pool, high_score)
        .expect("Invalid game configuration.")
        .with_events(ConsoleEvents::new(args.rounds));

    let stdin = BufReader::new(tokio::io::stdin());
    if let Err(err) = console::run(&mut engine, stdin).await {
        tracing::error!(task = "console", error = %err, "The game stopped unexpectedly.");
    }
    engine.flush().await;
}
