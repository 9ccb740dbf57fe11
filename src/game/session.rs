//! Turn state machine for one game
//!
//! A session owns its target, attempt log, pending row and keyboard state.
//! The word bank is borrowed read-only, so several sessions can share one.

use crate::core::{GuessResult, KeyboardState, Word};
use crate::wordlists::WordBank;
use rand::Rng;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Default number of attempts per game
pub const MAX_ATTEMPTS: usize = 6;

/// Largest attempt limit a session accepts
pub const ATTEMPT_LIMIT: usize = 32;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    /// Won and Lost accept no further input
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Rejected guess or keystroke. None of these change the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Guess must be {expected} letters long, got {found}")]
    IncompleteGuess { expected: usize, found: usize },
    #[error("'{0}' is not in word list")]
    NotInDictionary(String),
    #[error("Game is over ({0}); start a new game")]
    InvalidState(SessionStatus),
}

/// Target that cannot start a session against a given bank
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("Target '{word}' has {found} letters, expected {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        found: usize,
    },
    #[error("Target '{0}' is not in word list")]
    NotInBank(String),
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub result: GuessResult,
}

/// A single game against a fixed target
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    bank: &'a WordBank,
    target: Word,
    attempts: Vec<Attempt>,
    pending: String,
    keyboard: KeyboardState,
    status: SessionStatus,
    max_attempts: usize,
}

impl<'a> GameSession<'a> {
    /// Start a game with the default attempt limit
    ///
    /// # Errors
    ///
    /// Returns `TargetError` if the target does not belong to `bank`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::{GameSession, SessionStatus};
    /// use wordle_game::core::Word;
    /// use wordle_game::wordlists::WordBank;
    ///
    /// let bank = WordBank::load(["crane", "react", "slate"]).unwrap();
    /// let mut session = GameSession::begin(&bank, Word::new("crane").unwrap()).unwrap();
    ///
    /// for ch in "react".chars() {
    ///     session.append_letter(ch).unwrap();
    /// }
    /// let result = session.submit().unwrap();
    /// assert_eq!(result.to_string(), "YYGYX");
    /// assert_eq!(session.status(), SessionStatus::InProgress);
    /// ```
    pub fn begin(bank: &'a WordBank, target: Word) -> Result<Self, TargetError> {
        Self::with_max_attempts(bank, target, MAX_ATTEMPTS)
    }

    /// Start a game with a custom attempt limit
    ///
    /// The limit is clamped to `1..=ATTEMPT_LIMIT`.
    ///
    /// # Errors
    ///
    /// Returns `TargetError` if the target does not belong to `bank`.
    #[instrument(skip(bank, target), fields(answer = %target))]
    pub fn with_max_attempts(
        bank: &'a WordBank,
        target: Word,
        max_attempts: usize,
    ) -> Result<Self, TargetError> {
        if target.len() != bank.word_len() {
            return Err(TargetError::LengthMismatch {
                word: target.text().to_string(),
                expected: bank.word_len(),
                found: target.len(),
            });
        }
        if !bank.contains(target.text()) {
            return Err(TargetError::NotInBank(target.text().to_string()));
        }

        debug!("session started");
        Ok(Self::fresh(bank, target, max_attempts))
    }

    /// Start a game against a random word from `bank`
    pub fn random<R: Rng + ?Sized>(bank: &'a WordBank, rng: &mut R, max_attempts: usize) -> Self {
        let target = bank.sample(rng).clone();
        debug!(answer = %target, "random session started");
        Self::fresh(bank, target, max_attempts)
    }

    fn fresh(bank: &'a WordBank, target: Word, max_attempts: usize) -> Self {
        let max_attempts = max_attempts.clamp(1, ATTEMPT_LIMIT);
        Self {
            bank,
            target,
            attempts: Vec::new(),
            pending: String::with_capacity(bank.word_len()),
            keyboard: KeyboardState::new(),
            status: SessionStatus::InProgress,
            max_attempts,
        }
    }

    /// Discard everything and start over against `target`
    ///
    /// The bank and attempt limit carry over. On error the current game is
    /// left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `TargetError` if the target does not belong to the bank.
    pub fn reset(&mut self, target: Word) -> Result<(), TargetError> {
        *self = Self::with_max_attempts(self.bank, target, self.max_attempts)?;
        Ok(())
    }

    /// Add a letter to the pending row
    ///
    /// Returns `Ok(false)` when the keystroke is ignored: the row is already
    /// full or `ch` is not an ASCII letter.
    ///
    /// # Errors
    ///
    /// Returns `GuessError::InvalidState` once the game is over.
    pub fn append_letter(&mut self, ch: char) -> Result<bool, GuessError> {
        self.ensure_in_progress()?;
        if self.pending.len() >= self.word_len() || !ch.is_ascii_alphabetic() {
            return Ok(false);
        }
        self.pending.push(ch.to_ascii_uppercase());
        Ok(true)
    }

    /// Remove the last pending letter
    ///
    /// Does nothing on an empty row or a finished game.
    pub fn delete_letter(&mut self) -> Option<char> {
        if self.status.is_terminal() {
            return None;
        }
        self.pending.pop()
    }

    /// Submit the pending row
    ///
    /// On success the attempt is logged, the keyboard updated, the row
    /// cleared and the status advanced. On failure nothing changes; an
    /// unknown word stays in the row so it can be corrected.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the game is over
    /// - `IncompleteGuess` if the row is not full
    /// - `NotInDictionary` if the word is not in the bank
    #[instrument(skip(self), fields(guess = %self.pending, attempt = self.attempts.len() + 1))]
    pub fn submit(&mut self) -> Result<GuessResult, GuessError> {
        let guess = self.validate(&self.pending)?;
        let result = self.apply(guess);
        self.pending.clear();
        Ok(result)
    }

    /// Submit a whole word, bypassing the pending row
    ///
    /// Same checks and transitions as [`submit`](Self::submit). The pending
    /// row is cleared only when the word is accepted.
    ///
    /// # Errors
    ///
    /// Same as [`submit`](Self::submit).
    #[instrument(skip(self), fields(attempt = self.attempts.len() + 1))]
    pub fn submit_word(&mut self, word: &str) -> Result<GuessResult, GuessError> {
        let guess = self.validate(word.trim())?;
        let result = self.apply(guess);
        self.pending.clear();
        Ok(result)
    }

    fn ensure_in_progress(&self) -> Result<(), GuessError> {
        if self.status.is_terminal() {
            return Err(GuessError::InvalidState(self.status));
        }
        Ok(())
    }

    /// All checks happen here, before any mutation
    fn validate(&self, raw: &str) -> Result<Word, GuessError> {
        self.ensure_in_progress()?;

        let found = raw.chars().count();
        if found != self.word_len() {
            return Err(GuessError::IncompleteGuess {
                expected: self.word_len(),
                found,
            });
        }

        match self.bank.get(raw) {
            Some(word) => Ok(word.clone()),
            None => {
                debug!(guess = raw, "rejected: not in word list");
                Err(GuessError::NotInDictionary(raw.to_ascii_uppercase()))
            }
        }
    }

    fn apply(&mut self, guess: Word) -> GuessResult {
        let result = GuessResult::evaluate(&self.target, &guess);
        self.keyboard.record(&guess, &result);

        let won = guess == self.target;
        self.attempts.push(Attempt {
            guess,
            result: result.clone(),
        });

        if won {
            self.status = SessionStatus::Won;
            info!(attempts = self.attempts.len(), "game won");
        } else if self.attempts.len() >= self.max_attempts {
            self.status = SessionStatus::Lost;
            info!(answer = %self.target, "game lost");
        } else {
            debug!(feedback = %result, remaining = self.attempts_remaining(), "guess accepted");
        }

        result
    }

    /// The word being guessed
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Accepted guesses in order
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// Best status seen per letter
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts.len())
    }

    /// Letters per word
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.bank.word_len()
    }

    /// The dictionary this session validates against
    #[must_use]
    pub const fn bank(&self) -> &'a WordBank {
        self.bank
    }
}
