pub const HIGH_SCORE_KEY: &str = "highscore";
