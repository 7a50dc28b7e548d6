use crate::console::{describe_guess, describe_round, describe_summary, parse_guess, run, GuessInput};
use crate::game::high_score::HighScoreTracker;
use crate::game::models::{GameState, Round, SessionSummary};
use crate::game::{GameConfig, RoundEngine};
use crate::locations::pool::LocationPool;
use crate::locations::tests::fake_catalog;
use crate::map::consts::DEFAULT_PIN;
use crate::map::models::LatLng;
use crate::storage::memory::InMemoryHighScoreStore;
use std::sync::Arc;

async fn fake_engine() -> RoundEngine {
    let store = Arc::new(InMemoryHighScoreStore::default());
    let tracker = HighScoreTracker::load(store).await;
    RoundEngine::new(
        GameConfig::default(),
        LocationPool::with_seed(fake_catalog(), 99),
        tracker,
    )
    .expect("Failed to build the engine.")
}

fn resolved_round() -> Round {
    let target = fake_catalog().remove(2);
    let mut round = Round::new(3, target, DEFAULT_PIN);
    round.guess = Some(LatLng::new(25.0, 32.0));
    round.distance_km = Some(95.4321);
    round.points = Some(693.2);
    round
}

#[test]
fn test_parse_guess() {
    assert_eq!(parse_guess("   "), Ok(GuessInput::KeepPin));
    assert_eq!(parse_guess("Q"), Ok(GuessInput::Quit));
    assert_eq!(parse_guess("quit\n"), Ok(GuessInput::Quit));
    assert_eq!(
        parse_guess("48.8584, 2.2945"),
        Ok(GuessInput::Coordinate(LatLng::new(48.8584, 2.2945)))
    );
    assert!(parse_guess("somewhere in France").is_err());
    assert!(parse_guess("120, 0").is_err());
}

#[test]
fn test_describe_round() {
    let round = Round::new(1, fake_catalog().remove(0), DEFAULT_PIN);
    assert_eq!(
        describe_round(&round, 10),
        "Round 1/10: assets/everglades.jpg (aspect ratio 0.625)\n\
         Your pin is at 37.78825, -122.43240."
    );
}

#[test]
fn test_describe_guess() {
    assert_eq!(
        describe_guess(&resolved_round(), 1693.2),
        "It was luxor at 25.68724, 32.63964.\n\
         Distance: 95.43 km, +693 points. Ka-ching!\n\
         Score: 1693"
    );
}

#[test]
fn test_describe_guess_without_points() {
    let mut round = resolved_round();
    round.distance_km = Some(19_000.0);
    round.points = Some(0.0001);
    assert!(!describe_guess(&round, 0.0).contains("Ka-ching"));
}

#[test]
fn test_describe_summary() {
    let summary = SessionSummary {
        final_total: 6543.4,
        high_score: 6543.4,
        is_new_high_score: true,
        is_victory: true,
    };
    assert_eq!(
        describe_summary(&summary),
        "Score: 6543\nHigh score: 6543\nNew high score!"
    );
    let summary = SessionSummary {
        final_total: 0.2,
        high_score: 9000.0,
        is_new_high_score: false,
        is_victory: false,
    };
    assert!(describe_summary(&summary).ends_with("Better luck next time."));
}

#[tokio::test]
async fn test_plays_a_whole_session_keeping_the_pin() {
    let mut engine = fake_engine().await;
    let script = "\n\n".repeat(10) + "n\n";

    run(&mut engine, script.as_bytes())
        .await
        .expect("The game failed.");

    assert_eq!(engine.state(), GameState::SessionEnded);
    let rounds = &engine.session().unwrap().rounds;
    assert_eq!(rounds.len(), 10);
    assert_eq!(rounds[0].guess, Some(DEFAULT_PIN));
    for pair in rounds.windows(2) {
        assert_eq!(pair[1].guess, Some(pair[0].target.position));
    }
}

#[tokio::test]
async fn test_bad_input_asks_again() {
    let mut engine = fake_engine().await;

    run(&mut engine, "over there\n12.5, 45\n".as_bytes())
        .await
        .expect("The game failed.");

    let round = &engine.session().unwrap().rounds[0];
    assert_eq!(round.guess, Some(LatLng::new(12.5, 45.0)));
    // The input ran out before the player continued.
    assert_eq!(engine.state(), GameState::RoundResolved);
}

#[tokio::test]
async fn test_play_again_starts_a_fresh_session() {
    let mut engine = fake_engine().await;
    let script = "\n\n".repeat(10) + "y\nq\n";

    run(&mut engine, script.as_bytes())
        .await
        .expect("The game failed.");

    assert_eq!(engine.state(), GameState::InRound);
    let session = engine.session().unwrap();
    assert_eq!(session.rounds.len(), 1);
    assert_eq!(session.total_score, 0.0);
    assert_eq!(engine.pool().available_count(), 9);
}
