use crate::game::models::{Round, SessionSummary};

/// Hooks the presentation layer implements to follow the game. All of them default to
/// doing nothing.
pub trait GameEvents: Send {
    fn on_round_started(&mut self, _round: &Round) {}

    /// `round` carries the guess, the distance and the points.
    fn on_guess_resolved(&mut self, _round: &Round) {}

    fn on_session_ended(&mut self, _summary: &SessionSummary) {}
}

pub struct NoopEvents;

impl GameEvents for NoopEvents {}
