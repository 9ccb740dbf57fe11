//! Keyboard letter tracking
//!
//! Aggregates tile feedback across all guesses of a session into the best
//! status seen per letter. Statuses only ever move up `Absent < Present < Correct`.

use super::{GuessResult, TileStatus, Word};
use rustc_hash::FxHashMap;

/// Best status observed per letter
///
/// Letters that have not been guessed yet are simply missing from the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<u8, TileStatus>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new state with one guess merged in
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GuessResult, KeyboardState, TileStatus, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let guess = Word::new("react").unwrap();
    /// let result = GuessResult::evaluate(&target, &guess);
    ///
    /// let keyboard = KeyboardState::new().merge(&guess, &result);
    /// assert_eq!(keyboard.status('A'), Some(TileStatus::Correct));
    /// assert_eq!(keyboard.status('T'), Some(TileStatus::Absent));
    /// assert_eq!(keyboard.status('Z'), None);
    /// ```
    #[must_use]
    pub fn merge(&self, guess: &Word, result: &GuessResult) -> Self {
        let mut next = self.clone();
        next.record(guess, result);
        next
    }

    /// Merge one guess in place
    ///
    /// Each letter keeps the maximum of its recorded status and the new
    /// observation, so a repeated letter with mixed feedback in a single row
    /// resolves to its best tile.
    pub fn record(&mut self, guess: &Word, result: &GuessResult) {
        for (&letter, status) in guess.letters().iter().zip(result.iter()) {
            self.letters
                .entry(letter)
                .and_modify(|best| *best = (*best).max(status))
                .or_insert(status);
        }
    }

    /// Best status seen for a letter (case-insensitive)
    #[must_use]
    pub fn status(&self, letter: char) -> Option<TileStatus> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.letters
            .get(&(letter.to_ascii_uppercase() as u8))
            .copied()
    }

    /// Letters whose best status is exactly `status`, in alphabetical order
    #[must_use]
    pub fn letters_with(&self, status: TileStatus) -> Vec<char> {
        let mut letters: Vec<char> = self
            .letters
            .iter()
            .filter(|&(_, &s)| s == status)
            .map(|(&l, _)| char::from(l))
            .collect();
        letters.sort_unstable();
        letters
    }

    /// Letters A-Z that have not appeared in any guess yet
    #[must_use]
    pub fn unused(&self) -> Vec<char> {
        (b'A'..=b'Z')
            .filter(|l| !self.letters.contains_key(l))
            .map(char::from)
            .collect()
    }

    /// Number of letters observed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
