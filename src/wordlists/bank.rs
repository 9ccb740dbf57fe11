//! Fixed-length dictionary
//!
//! A `WordBank` answers "is this a legal guess?" and supplies targets. It is
//! immutable after loading and can be shared by reference between any number
//! of sessions.

use crate::core::{Word, WordError};
use rand::Rng;
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::debug;

/// Why a word list could not become a `WordBank`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("Invalid dictionary: word list is empty")]
    Empty,
    #[error("Invalid dictionary: '{word}' has {found} letters, expected {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        found: usize,
    },
    #[error("Invalid dictionary: entry '{entry}' is not a word: {source}")]
    InvalidEntry {
        entry: String,
        #[source]
        source: WordError,
    },
}

/// Ordered set of equal-length words
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<Word>,
    index: FxHashSet<Word>,
    word_len: usize,
}

impl WordBank {
    /// Build a bank from raw entries
    ///
    /// Entries are trimmed and normalized to uppercase. Duplicates keep their
    /// first position. Every entry must have the length of the first one.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError` if the list is empty, contains an entry that
    /// is not a word, or mixes word lengths.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordBank;
    ///
    /// let bank = WordBank::load(["crane", "SLATE", "irate"]).unwrap();
    /// assert_eq!(bank.word_len(), 5);
    /// assert!(bank.contains("Slate"));
    ///
    /// assert!(WordBank::load(["crane", "cat"]).is_err());
    /// ```
    pub fn load<I, S>(entries: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();
        let mut word_len = None;

        for entry in entries {
            let entry = entry.as_ref().trim();
            let word = Word::new(entry).map_err(|source| DictionaryError::InvalidEntry {
                entry: entry.to_string(),
                source,
            })?;

            let expected = *word_len.get_or_insert(word.len());
            if word.len() != expected {
                return Err(DictionaryError::LengthMismatch {
                    word: word.text().to_string(),
                    expected,
                    found: word.len(),
                });
            }

            if index.insert(word.clone()) {
                words.push(word);
            }
        }

        let word_len = word_len.ok_or(DictionaryError::Empty)?;
        debug!(words = words.len(), word_len, "loaded word bank");

        Ok(Self {
            words,
            index,
            word_len,
        })
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Look up the canonical bank entry for a word
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Word> {
        if word.len() != self.word_len {
            return None;
        }
        Word::new(word).ok().and_then(|w| self.index.get(&w))
    }

    /// Pick a uniformly random word using the caller's random source
    ///
    /// # Examples
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use wordle_game::wordlists::WordBank;
    ///
    /// let bank = WordBank::load(["crane", "slate", "irate"]).unwrap();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let target = bank.sample(&mut rng);
    /// assert!(bank.contains(target.text()));
    /// ```
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // A loaded bank is never empty
        &self.words[rng.random_range(0..self.words.len())]
    }

    /// Length shared by every word
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; loading rejects empty lists
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in load order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn small_bank() -> WordBank {
        WordBank::load(["crane", "slate", "irate", "crate"]).unwrap()
    }

    #[test]
    fn load_normalizes_and_keeps_order() {
        let bank = WordBank::load([" crane ", "Slate", "IRATE"]).unwrap();
        let texts: Vec<&str> = bank.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn load_drops_duplicates() {
        let bank = WordBank::load(["crane", "CRANE", "slate"]).unwrap();
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn load_rejects_empty() {
        let entries: [&str; 0] = [];
        assert_eq!(WordBank::load(entries).unwrap_err(), DictionaryError::Empty);
    }

    #[test]
    fn load_rejects_mixed_lengths() {
        let err = WordBank::load(["crane", "slates"]).unwrap_err();
        assert_eq!(
            err,
            DictionaryError::LengthMismatch {
                word: "SLATES".to_string(),
                expected: 5,
                found: 6,
            }
        );
    }

    #[test]
    fn load_rejects_non_words() {
        let err = WordBank::load(["crane", "cr4ne"]).unwrap_err();
        assert!(matches!(err, DictionaryError::InvalidEntry { .. }));
        assert!(err.to_string().contains("cr4ne"));
    }

    #[test]
    fn load_accepts_other_lengths() {
        let bank = WordBank::load(["cat", "dog", "owl"]).unwrap();
        assert_eq!(bank.word_len(), 3);
        assert!(bank.contains("DOG"));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let bank = small_bank();
        assert!(bank.contains("crane"));
        assert!(bank.contains("CrAnE"));
        assert!(!bank.contains("zzzzz"));
        assert!(!bank.contains("cranes"));
        assert!(!bank.contains("cr4ne"));
        assert!(!bank.contains(""));
    }

    #[test]
    fn sample_is_deterministic_with_seed() {
        let bank = small_bank();
        let a = bank.sample(&mut StdRng::seed_from_u64(42)).clone();
        let b = bank.sample(&mut StdRng::seed_from_u64(42)).clone();
        assert_eq!(a, b);
        assert!(bank.contains(a.text()));
    }

    #[test]
    fn sample_reaches_every_word() {
        let bank = small_bank();
        let mut rng = StdRng::seed_from_u64(1);
        let seen: FxHashSet<Word> = (0..200).map(|_| bank.sample(&mut rng).clone()).collect();
        assert_eq!(seen.len(), bank.len());
    }

    #[test]
    fn bank_is_shareable_across_threads() {
        fn assert_sync<T: Sync + Send>() {}
        assert_sync::<WordBank>();
    }
}
