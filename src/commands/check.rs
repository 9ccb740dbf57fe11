//! Guess check command
//!
//! Scores a single guess against a chosen target without starting a game.

use crate::core::{GuessResult, Word};
use crate::wordlists::WordBank;

/// Result of checking a guess
pub struct CheckResult {
    pub target: Word,
    pub guess: Word,
    pub result: GuessResult,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is malformed, has the wrong length, or is
/// not in the word list.
pub fn check_guess(bank: &WordBank, target: &str, guess: &str) -> Result<CheckResult, String> {
    let target = lookup(bank, "Target", target)?;
    let guess = lookup(bank, "Guess", guess)?;
    let result = GuessResult::evaluate(&target, &guess);

    Ok(CheckResult {
        target,
        guess,
        result,
    })
}

fn lookup(bank: &WordBank, role: &str, text: &str) -> Result<Word, String> {
    let word = Word::new(text.trim()).map_err(|e| format!("Invalid {role}: {e}"))?;

    if word.len() != bank.word_len() {
        return Err(format!(
            "{role} '{word}' must be {} letters, got {}",
            bank.word_len(),
            word.len()
        ));
    }

    bank.get(word.text())
        .cloned()
        .ok_or_else(|| format!("{role} '{word}' not in word list"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileStatus;

    fn bank() -> WordBank {
        WordBank::load(["crane", "react", "alloy", "loyal"]).unwrap()
    }

    #[test]
    fn check_scores_guess() {
        let result = check_guess(&bank(), "crane", "react").unwrap();
        assert_eq!(result.target.text(), "CRANE");
        assert_eq!(result.result.to_string(), "YYGYX");
    }

    #[test]
    fn check_anagram() {
        let result = check_guess(&bank(), "ALLOY", "loyal").unwrap();
        assert_eq!(result.result.count(TileStatus::Present), 5);
    }

    #[test]
    fn check_rejects_unknown_words() {
        let err = check_guess(&bank(), "crane", "zzzzz").err().unwrap();
        assert_eq!(err, "Guess 'ZZZZZ' not in word list");

        let err = check_guess(&bank(), "slate", "crane").err().unwrap();
        assert_eq!(err, "Target 'SLATE' not in word list");
    }

    #[test]
    fn check_rejects_bad_input() {
        assert!(check_guess(&bank(), "crane", "cr4ne").is_err());
        let err = check_guess(&bank(), "crane", "cranes").err().unwrap();
        assert!(err.contains("must be 5 letters"));
    }
}
