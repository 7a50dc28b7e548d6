use crate::game::models::GameState;
use crate::locations::pool::PoolError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("cannot {operation}: {state}")]
    InvalidState {
        operation: &'static str,
        state: GameState,
    },
    #[error("ran out of locations mid-session")]
    EmptyPool(#[from] PoolError),
    #[error("a game of {rounds_per_game} rounds needs at least as many locations, got {locations}")]
    NotEnoughLocations {
        rounds_per_game: usize,
        locations: usize,
    },
    #[error("a game needs at least one round")]
    NoRounds,
}
