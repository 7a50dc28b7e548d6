pub const ROUNDS_PER_GAME: usize = 10;
