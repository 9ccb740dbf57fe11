//! Word list loading utilities
//!
//! Reads newline-delimited word lists from text, files, or the embedded
//! default, and turns them into a `WordBank`.

use super::{WORDS, WordBank};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Split a word list into entries
///
/// Lines are trimmed; blank lines and `#` comments are skipped. No other
/// validation happens here, that is `WordBank::load`'s job.
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Load a bank from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its entries do not form a
/// valid dictionary.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let bank = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", bank.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordBank> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    WordBank::load(parse_word_list(&content))
        .with_context(|| format!("Word list {} is not usable", path.display()))
}

/// Load the dictionary compiled into the binary
///
/// # Errors
///
/// Returns an error only if the embedded list is malformed.
pub fn load_embedded() -> Result<WordBank> {
    WordBank::load(WORDS).context("Embedded word list is not usable")
}
