/// Points awarded for a guess that lands exactly on the target.
pub const MAX_ROUND_SCORE: f64 = 1000.0;
/// Each kilometre away from the target divides the score by this much.
pub const SCORE_DECAY_BASE: f64 = 1.003845015;
