use clap::Parser;
use std::path::PathBuf;

/// Find places on the globe from their pictures.
#[derive(Debug, Parser)]
pub struct Args {
    /// Newline-delimited JSON file with one location per line.
    #[arg(long)]
    #[arg(default_value = "locations.example.ndjson")]
    pub locations: PathBuf,
    #[arg(long)]
    #[arg(default_value = "highscore.json")]
    pub high_score_file: PathBuf,
    #[arg(long)]
    #[arg(default_value_t = crate::game::consts::ROUNDS_PER_GAME)]
    pub rounds: usize,
    /// Makes the order of locations reproducible.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Log every round to stderr.
    #[arg(long, short)]
    pub verbose: bool,
}
