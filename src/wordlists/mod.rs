//! Word lists and the dictionary
//!
//! Provides the embedded default list, loaders for custom lists, and the
//! `WordBank` used to validate guesses and draw targets.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{DictionaryError, WordBank};
pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_cover_examples() {
        for word in ["crane", "react", "alloy", "loyal", "slate"] {
            assert!(WORDS.contains(&word), "missing '{word}'");
        }
    }
}
