use crate::locations::pool::LocationPool;
use crate::map::consts::DEFAULT_PIN;
use crate::map::models::LatLng;
use crate::scoring::{self, ScoringConfig};
use consts::ROUNDS_PER_GAME;
use errors::GameError;
use events::{GameEvents, NoopEvents};
use high_score::HighScoreTracker;
use models::{GameState, Progress, Round, Session, SessionSummary};

pub mod consts;
pub mod errors;
pub mod events;
pub mod high_score;
pub mod models;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub rounds_per_game: usize,
    pub scoring: ScoringConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds_per_game: ROUNDS_PER_GAME,
            scoring: ScoringConfig::default(),
        }
    }
}

/// Drives sessions of a fixed number of rounds.
///
/// Every mutating call either succeeds completely or returns an error and leaves the
/// engine exactly as it was (apart from the pool's order when a session fails to start).
pub struct RoundEngine {
    config: GameConfig,
    pool: LocationPool,
    high_score: HighScoreTracker,
    events: Box<dyn GameEvents>,
    state: GameState,
    session: Option<Session>,
}

impl RoundEngine {
    pub fn new(
        config: GameConfig,
        pool: LocationPool,
        high_score: HighScoreTracker,
    ) -> Result<Self, GameError> {
        if config.rounds_per_game == 0 {
            return Err(GameError::NoRounds);
        }
        if pool.len() < config.rounds_per_game {
            return Err(GameError::NotEnoughLocations {
                rounds_per_game: config.rounds_per_game,
                locations: pool.len(),
            });
        }
        Ok(Self {
            config,
            pool,
            high_score,
            events: Box::new(NoopEvents),
            state: GameState::NotStarted,
            session: None,
        })
    }

    pub fn with_events(mut self, events: impl GameEvents + 'static) -> Self {
        self.events = Box::new(events);
        self
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The running session, or the last finished one.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn current_round(&self) -> Option<&Round> {
        match self.state {
            GameState::InRound | GameState::RoundResolved => {
                self.session.as_ref().and_then(Session::current_round)
            }
            GameState::NotStarted | GameState::SessionEnded => None,
        }
    }

    pub fn high_score(&self) -> f64 {
        self.high_score.best()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn pool(&self) -> &LocationPool {
        &self.pool
    }

    pub fn start_session(&mut self) -> Result<&Round, GameError> {
        self.expect_state("start a session", |state| {
            matches!(state, GameState::NotStarted | GameState::SessionEnded)
        })?;
        self.pool.return_all_and_reshuffle();
        let target = self.pool.draw_next()?;

        let mut session = Session::new(self.config.rounds_per_game);
        session.rounds.push(Round::new(1, target, DEFAULT_PIN));
        tracing::info!(
            task = "session",
            session_id = %session.id,
            rounds_per_game = session.rounds_per_game,
            "Session started."
        );
        self.state = GameState::InRound;
        let session = self.session.insert(session);
        let round = session.rounds.last().expect("a round was just pushed");
        tracing::debug!(
            task = "round",
            session_id = %session.id,
            round_number = round.round_number,
            location_id = %round.target.id,
            "Round started."
        );
        self.events.on_round_started(round);
        Ok(round)
    }

    pub fn submit_guess(&mut self, guess: LatLng) -> Result<&Round, GameError> {
        self.expect_state("submit a guess", |state| state == GameState::InRound)?;
        let Some(Session {
            id,
            rounds,
            total_score,
            ..
        }) = self.session.as_mut()
        else {
            return Err(GameError::InvalidState {
                operation: "submit a guess",
                state: self.state,
            });
        };
        let Some(round) = rounds.last_mut() else {
            return Err(GameError::InvalidState {
                operation: "submit a guess",
                state: self.state,
            });
        };

        let points = round.resolve(guess, &self.config.scoring);
        *total_score += points;
        self.state = GameState::RoundResolved;

        let round = &*round;
        tracing::info!(
            task = "round",
            session_id = %id,
            round_number = round.round_number,
            location_id = %round.target.id,
            distance_km = round.distance_km,
            points,
            total_score = *total_score,
            "Guess resolved."
        );
        self.events.on_guess_resolved(round);
        Ok(round)
    }

    pub fn advance(&mut self) -> Result<Progress, GameError> {
        self.expect_state("advance", |state| state == GameState::RoundResolved)?;
        let session = self.session.as_mut().ok_or(GameError::InvalidState {
            operation: "advance",
            state: self.state,
        })?;

        if session.is_last_round() {
            let final_total = session.total_score;
            let is_new_high_score = self.high_score.record(final_total);
            let summary = SessionSummary {
                final_total,
                high_score: self.high_score.best(),
                is_new_high_score,
                is_victory: scoring::earned_points(final_total),
            };
            self.state = GameState::SessionEnded;
            tracing::info!(
                task = "session",
                session_id = %session.id,
                final_total,
                high_score = summary.high_score,
                is_new_high_score,
                "Session ended."
            );
            self.events.on_session_ended(&summary);
            return Ok(Progress::SessionEnded(summary));
        }

        let target = self.pool.draw_next()?;
        let pin_start = session
            .current_round()
            .map_or(DEFAULT_PIN, |round| round.target.position);
        let round_number = session.round_number() + 1;
        session
            .rounds
            .push(Round::new(round_number, target, pin_start));
        self.state = GameState::InRound;

        let round = session.rounds.last().expect("a round was just pushed");
        tracing::debug!(
            task = "round",
            session_id = %session.id,
            round_number,
            location_id = %round.target.id,
            "Round started."
        );
        self.events.on_round_started(round);
        Ok(Progress::NextRound { round_number })
    }

    /// Waits for a pending high score write.
    pub async fn flush(&mut self) {
        self.high_score.flush().await;
    }

    fn expect_state(
        &self,
        operation: &'static str,
        allowed: impl Fn(GameState) -> bool,
    ) -> Result<(), GameError> {
        if allowed(self.state) {
            Ok(())
        } else {
            tracing::warn!(task = "session", operation, state = ?self.state, "Rejected out-of-order call.");
            Err(GameError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }
}
