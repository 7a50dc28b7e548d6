use crate::locations::models::Location;
use crate::map::{self, models::LatLng};
use crate::scoring::ScoringConfig;
use std::fmt;
use uuid::Uuid;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    /// The current round is waiting for a guess.
    InRound,
    /// The current round has been scored and the player is looking at the answer.
    RoundResolved,
    SessionEnded,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::NotStarted => "no session has started",
            Self::InRound => "a round is waiting for a guess",
            Self::RoundResolved => "the round is already resolved",
            Self::SessionEnded => "the session has ended",
        };
        f.write_str(description)
    }
}

#[derive(Clone, Debug)]
pub struct Round {
    /// 1-based.
    pub round_number: usize,
    pub target: Location,
    /// Where the guess pin sits before the player moves it.
    pub pin_start: LatLng,
    pub guess: Option<LatLng>,
    pub distance_km: Option<f64>,
    pub points: Option<f64>,
}

impl Round {
    pub fn new(round_number: usize, target: Location, pin_start: LatLng) -> Self {
        Self {
            round_number,
            target,
            pin_start,
            guess: None,
            distance_km: None,
            points: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.points.is_some()
    }

    /// Scores `guess` against the target. Returns the points earned.
    pub(crate) fn resolve(&mut self, guess: LatLng, scoring: &ScoringConfig) -> f64 {
        let distance_km = map::distance_km(guess, self.target.position);
        let points = scoring.score(distance_km);
        self.guess = Some(guess);
        self.distance_km = Some(distance_km);
        self.points = Some(points);
        points
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    pub id: Uuid,
    /// Played rounds in order; the last one is the current round.
    pub rounds: Vec<Round>,
    pub total_score: f64,
    pub rounds_per_game: usize,
}

impl Session {
    pub fn new(rounds_per_game: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            rounds: Vec::with_capacity(rounds_per_game),
            total_score: 0.0,
            rounds_per_game,
        }
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn round_number(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_last_round(&self) -> bool {
        self.round_number() >= self.rounds_per_game
    }
}

/// What happened when the engine moved past a resolved round.
#[derive(Clone, Debug, PartialEq)]
pub enum Progress {
    NextRound { round_number: usize },
    SessionEnded(SessionSummary),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SessionSummary {
    pub final_total: f64,
    /// Best total ever, this session included.
    pub high_score: f64,
    pub is_new_high_score: bool,
    /// The total is worth at least one point once rounded.
    pub is_victory: bool,
}
