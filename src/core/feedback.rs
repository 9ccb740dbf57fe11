//! Guess feedback calculation and representation
//!
//! Each position of a guess gets one of three statuses:
//! - Absent (letter not available at that position under multiset accounting)
//! - Present (letter in word, wrong position)
//! - Correct (letter in correct position)
//!
//! The derived ordering `Absent < Present < Correct` is the upgrade order used
//! by the keyboard tracker.

use super::Word;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Feedback for a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TileStatus {
    Absent,
    Present,
    Correct,
}

impl TileStatus {
    /// Single-letter symbol: G (correct), Y (present), X (absent)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }

    /// Emoji square used in share strings
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, aligned positionally with the guessed word
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GuessResult(Vec<TileStatus>);

impl GuessResult {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// This implements the exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. Count every letter of the target
    /// 2. First pass: mark exact matches Correct and remove them from the pool
    /// 3. Second pass: mark remaining positions Present while the pool still
    ///    holds that letter, otherwise Absent
    ///
    /// Callers are expected to pass words of equal length. A guess position
    /// past the end of the target can never be Correct.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GuessResult, TileStatus::*, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let guess = Word::new("react").unwrap();
    /// let result = GuessResult::evaluate(&target, &guess);
    ///
    /// assert_eq!(result.statuses(), &[Present, Present, Correct, Present, Absent]);
    /// ```
    #[must_use]
    pub fn evaluate(target: &Word, guess: &Word) -> Self {
        debug_assert_eq!(target.len(), guess.len(), "guess and target lengths differ");

        let mut statuses = vec![TileStatus::Absent; guess.len()];
        let mut settled = vec![false; guess.len()];
        let mut remaining = target.char_counts();

        // First pass: exact position matches
        for (i, &letter) in guess.letters().iter().enumerate() {
            if target.letter_at(i) == Some(letter) {
                statuses[i] = TileStatus::Correct;
                settled[i] = true;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but an unclaimed copy exists
        for (i, &letter) in guess.letters().iter().enumerate() {
            if settled[i] {
                continue;
            }
            if let Some(count) = remaining.get_mut(&letter)
                && *count > 0
            {
                statuses[i] = TileStatus::Present;
                *count -= 1;
            }
        }

        let result = Self(statuses);
        debug!(answer = %target, guess = %guess, feedback = %result, "evaluated guess");
        result
    }

    /// Per-position statuses
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[TileStatus] {
        &self.0
    }

    /// Number of tiles
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length result
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over statuses in position order
    pub fn iter(&self) -> impl Iterator<Item = TileStatus> + '_ {
        self.0.iter().copied()
    }

    /// Check if every tile is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == TileStatus::Correct)
    }

    /// Count the tiles with a given status
    #[must_use]
    pub fn count(&self, status: TileStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::TileStatus::{Absent, Correct, Present};
    use super::*;
    use proptest::prelude::*;

    fn eval(target: &str, guess: &str) -> GuessResult {
        GuessResult::evaluate(&Word::new(target).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn status_order_is_upgrade_order() {
        assert!(Absent < Present);
        assert!(Present < Correct);
        assert_eq!(Absent.max(Correct), Correct);
    }

    #[test]
    fn crane_vs_react() {
        let result = eval("crane", "react");
        assert_eq!(result.statuses(), &[Present, Present, Correct, Present, Absent]);
    }

    #[test]
    fn anagram_with_duplicates_all_present() {
        let result = eval("alloy", "loyal");
        assert_eq!(result.statuses(), &[Present; 5]);
    }

    #[test]
    fn exact_match_all_correct() {
        let result = eval("crane", "crane");
        assert!(result.is_solved());
        assert_eq!(result.count(Correct), 5);
    }

    #[test]
    fn disjoint_letters_all_absent() {
        let result = eval("crane", "quilt");
        assert_eq!(result.statuses(), &[Absent; 5]);
        assert!(!result.is_solved());
    }

    #[test]
    fn green_takes_priority_over_earlier_yellow() {
        // ROBOT vs FLOOR: first O is yellow, second O is green
        let result = eval("floor", "robot");
        assert_eq!(result.statuses(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn surplus_duplicates_are_absent() {
        // SPEED vs ERASE: both E's present, S present
        let result = eval("erase", "speed");
        assert_eq!(result.statuses(), &[Present, Absent, Present, Present, Absent]);

        // Only one E in the target: the exact match wins, the other E is absent
        let result = eval("crane", "geese");
        assert_eq!(result.statuses(), &[Absent, Absent, Absent, Absent, Correct]);
    }

    #[test]
    fn display_uses_symbols() {
        assert_eq!(eval("crane", "react").to_string(), "YYGYX");
        assert_eq!(eval("crane", "react").to_emoji(), "🟨🟨🟩🟨⬜");
    }

    #[test]
    fn serializes_as_lowercase_list() {
        let json = serde_json::to_string(&eval("crane", "react")).unwrap();
        assert_eq!(
            json,
            r#"["present","present","correct","present","absent"]"#
        );
    }

    fn word_strategy() -> impl Strategy<Value = Word> {
        "[A-F]{5}".prop_map(|s| Word::new(s).unwrap())
    }

    proptest! {
        #[test]
        fn same_word_is_always_solved(w in word_strategy()) {
            prop_assert!(GuessResult::evaluate(&w, &w).is_solved());
        }

        #[test]
        fn non_absent_never_exceeds_target_count(
            target in word_strategy(),
            guess in word_strategy(),
        ) {
            let result = GuessResult::evaluate(&target, &guess);
            prop_assert_eq!(result.len(), guess.len());
            for letter in b'A'..=b'F' {
                let hits = guess
                    .letters()
                    .iter()
                    .zip(result.iter())
                    .filter(|&(&l, s)| l == letter && s != Absent)
                    .count();
                let available = target.letters().iter().filter(|&&l| l == letter).count();
                prop_assert!(hits <= available);
            }
        }

        #[test]
        fn exact_positions_are_always_correct(
            target in word_strategy(),
            guess in word_strategy(),
        ) {
            let result = GuessResult::evaluate(&target, &guess);
            for (i, status) in result.iter().enumerate() {
                let exact = target.letter_at(i) == guess.letter_at(i);
                prop_assert_eq!(exact, status == Correct);
            }
        }

        #[test]
        fn evaluation_is_deterministic(
            target in word_strategy(),
            guess in word_strategy(),
        ) {
            prop_assert_eq!(
                GuessResult::evaluate(&target, &guess),
                GuessResult::evaluate(&target, &guess)
            );
        }
    }
}
