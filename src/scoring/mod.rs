use consts::{MAX_ROUND_SCORE, SCORE_DECAY_BASE};

pub mod consts;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScoringConfig {
    pub max_points: f64,
    pub decay_base: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_points: MAX_ROUND_SCORE,
            decay_base: SCORE_DECAY_BASE,
        }
    }
}

impl ScoringConfig {
    /// `max_points * decay_base^(-distance_km)`.
    ///
    /// Decays exponentially with distance and never reaches zero for a finite distance,
    /// though very distant guesses may underflow to `0.0`.
    pub fn score(&self, distance_km: f64) -> f64 {
        self.max_points * self.decay_base.powf(-distance_km)
    }
}

pub fn score(distance_km: f64) -> f64 {
    ScoringConfig::default().score(distance_km)
}

/// Whether `points` is worth at least one point once rounded for display.
pub fn earned_points(points: f64) -> bool {
    points.round() > 0.0
}
