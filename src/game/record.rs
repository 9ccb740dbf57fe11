//! Serializable game records
//!
//! A record keeps every guess a player typed, including rejected ones, along
//! with the final outcome. Records are written as JSON lines.

use super::{GameSession, GuessError, SessionStatus};
use crate::core::GuessResult;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// What happened to one submitted guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepOutcome {
    Accepted { feedback: GuessResult },
    Rejected { reason: String },
}

/// One submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// Attempt number the guess was made on (1-based)
    pub turn: usize,
    pub guess: String,
    pub outcome: StepOutcome,
}

/// Everything about one finished (or abandoned) game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub target: String,
    pub won: bool,
    pub finished: bool,
    pub turns: usize,
    pub max_attempts: usize,
    pub word_length: usize,
    pub steps: Vec<StepRecord>,
}

/// Collects steps while a game is played
#[derive(Debug, Default, Clone)]
pub struct GameRecorder {
    steps: Vec<StepRecord>,
}

impl GameRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Note a submission and its outcome
    ///
    /// Call before the session moves on so `turn` reflects the attempt the
    /// guess was made on; for accepted guesses that is the new log length.
    pub fn observe(
        &mut self,
        session: &GameSession<'_>,
        guess: &str,
        outcome: &Result<GuessResult, GuessError>,
    ) {
        let (turn, outcome) = match outcome {
            Ok(feedback) => (
                session.attempts().len(),
                StepOutcome::Accepted {
                    feedback: feedback.clone(),
                },
            ),
            Err(err) => (
                session.attempts().len() + 1,
                StepOutcome::Rejected {
                    reason: err.to_string(),
                },
            ),
        };
        self.steps.push(StepRecord {
            turn,
            guess: guess.trim().to_ascii_uppercase(),
            outcome,
        });
    }

    /// Build the record and clear the recorder for the next game
    pub fn finish(&mut self, session: &GameSession<'_>) -> GameRecord {
        GameRecord {
            target: session.target().text().to_string(),
            won: session.status() == SessionStatus::Won,
            finished: session.status().is_terminal(),
            turns: session.attempts().len(),
            max_attempts: session.max_attempts(),
            word_length: session.word_len(),
            steps: std::mem::take(&mut self.steps),
        }
    }

    /// Drop steps of a game that will not be recorded
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    /// Steps observed so far
    #[must_use]
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }
}

impl GameRecord {
    /// Append this record as one JSON line
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    pub fn append_to(&self, path: &Path) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open record file {}", path.display()))?;

        serde_json::to_writer(&mut file, self).context("Failed to serialize game record")?;
        writeln!(file).context("Failed to write game record")?;
        Ok(())
    }
}
