use crate::game::errors::GameError;
use crate::game::events::GameEvents;
use crate::game::models::{Progress, Round, SessionSummary};
use crate::game::RoundEngine;
use crate::map::models::LatLng;
use crate::scoring;
use std::io::{self, Write};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

#[cfg(test)]
pub mod tests;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("failed to talk to the terminal")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// What the player typed at the guess prompt.
#[derive(Debug, PartialEq)]
pub enum GuessInput {
    /// Leave the pin where it is.
    KeepPin,
    Coordinate(LatLng),
    Quit,
}

pub fn parse_guess(raw: &str) -> Result<GuessInput, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(GuessInput::KeepPin);
    }
    if matches!(raw.to_ascii_lowercase().as_str(), "q" | "quit" | "exit") {
        return Ok(GuessInput::Quit);
    }
    raw.parse()
        .map(GuessInput::Coordinate)
        .map_err(|err| err.to_string())
}

pub fn describe_round(round: &Round, rounds_per_game: usize) -> String {
    format!(
        "Round {}/{}: {} (aspect ratio {})\nYour pin is at {}.",
        round.round_number,
        rounds_per_game,
        round.target.image,
        round.target.aspect_ratio,
        round.pin_start,
    )
}

pub fn describe_guess(round: &Round, total_score: f64) -> String {
    let distance_km = round.distance_km.unwrap_or_default();
    let points = round.points.unwrap_or_default();
    let cue = if scoring::earned_points(points) {
        " Ka-ching!"
    } else {
        ""
    };
    format!(
        "It was {} at {}.\nDistance: {:.2} km, +{} points.{}\nScore: {}",
        round.target.id,
        round.target.position,
        distance_km,
        points.round(),
        cue,
        total_score.round(),
    )
}

pub fn describe_summary(summary: &SessionSummary) -> String {
    let verdict = match (summary.is_new_high_score, summary.is_victory) {
        (true, _) => "New high score!",
        (false, true) => "Well played.",
        (false, false) => "Better luck next time.",
    };
    format!(
        "Score: {}\nHigh score: {}\n{}",
        summary.final_total.round(),
        summary.high_score.round(),
        verdict,
    )
}

/// Prints the game as it unfolds.
pub struct ConsoleEvents {
    rounds_per_game: usize,
    total_score: f64,
}

impl ConsoleEvents {
    pub fn new(rounds_per_game: usize) -> Self {
        Self {
            rounds_per_game,
            total_score: 0.0,
        }
    }
}

impl GameEvents for ConsoleEvents {
    fn on_round_started(&mut self, round: &Round) {
        if round.round_number == 1 {
            self.total_score = 0.0;
        }
        println!("\n{}", describe_round(round, self.rounds_per_game));
    }

    fn on_guess_resolved(&mut self, round: &Round) {
        self.total_score += round.points.unwrap_or_default();
        println!("{}", describe_guess(round, self.total_score));
    }

    fn on_session_ended(&mut self, summary: &SessionSummary) {
        println!("\n{}", describe_summary(summary));
    }
}

fn prompt(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{text}")?;
    stdout.flush()
}

/// Plays sessions until the player quits or the input runs dry.
pub async fn run<R>(engine: &mut RoundEngine, input: R) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    println!("High score: {}", engine.high_score().round());
    loop {
        engine.start_session()?;
        if !play_session(engine, &mut lines).await? {
            return Ok(());
        }
        prompt("Play again? [y/N] ")?;
        match lines.next_line().await? {
            Some(answer) if matches!(answer.trim(), "y" | "Y" | "yes") => continue,
            _ => return Ok(()),
        }
    }
}

/// Returns `false` if the player quit before the session ended.
async fn play_session<R>(engine: &mut RoundEngine, lines: &mut Lines<R>) -> Result<bool, ConsoleError>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let Some(pin) = engine.current_round().map(|round| round.pin_start) else {
            return Ok(false);
        };
        prompt("Where is it? <lat>, <lng> (empty keeps the pin, q quits) > ")?;
        let Some(line) = lines.next_line().await? else {
            return Ok(false);
        };
        let guess = match parse_guess(&line) {
            Ok(GuessInput::KeepPin) => pin,
            Ok(GuessInput::Coordinate(guess)) => guess,
            Ok(GuessInput::Quit) => return Ok(false),
            Err(reason) => {
                println!("{reason}");
                continue;
            }
        };
        engine.submit_guess(guess)?;

        prompt("Press Enter to continue > ")?;
        if lines.next_line().await?.is_none() {
            return Ok(false);
        }
        if let Progress::SessionEnded(_) = engine.advance()? {
            return Ok(true);
        }
    }
}
