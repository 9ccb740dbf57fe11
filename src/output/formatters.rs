//! Formatting utilities for terminal output

use crate::core::{GuessResult, KeyboardState, TileStatus, Word};
use crate::game::{GameSession, SessionStatus};
use colored::{ColoredString, Colorize};

/// Plain-text board: one word line and one feedback line per attempt
///
/// ```text
/// =======
/// |REACT|
/// |YYGYX|
/// -------
/// |     |
/// |     |
/// =======
/// ```
#[must_use]
pub fn board_text(session: &GameSession<'_>) -> String {
    let width = session.word_len();
    let blank = format!("|{}|", " ".repeat(width));
    let mut lines = vec!["=".repeat(width + 2)];

    for row in 0..session.max_attempts() {
        if let Some(attempt) = session.attempts().get(row) {
            lines.push(format!("|{}|", attempt.guess));
            lines.push(format!("|{}|", attempt.result));
        } else {
            lines.push(blank.clone());
            lines.push(blank.clone());
        }

        if row + 1 < session.max_attempts() {
            lines.push("-".repeat(width + 2));
        }
    }

    lines.push("=".repeat(width + 2));
    lines.join("\n")
}

/// Plain-text summary of letters grouped by their best status
#[must_use]
pub fn letters_text(keyboard: &KeyboardState) -> String {
    let join = |letters: Vec<char>| {
        letters
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    };

    [
        "Letters:".to_string(),
        format!("  Correct: {}", join(keyboard.letters_with(TileStatus::Correct))),
        format!("  Present: {}", join(keyboard.letters_with(TileStatus::Present))),
        format!("  Absent:  {}", join(keyboard.letters_with(TileStatus::Absent))),
        format!("  Unused:  {}", join(keyboard.unused())),
    ]
    .join("\n")
}

/// Spoiler-free summary of a game, e.g. "3/6" followed by emoji rows
#[must_use]
pub fn share_text(session: &GameSession<'_>) -> String {
    let score = match session.status() {
        SessionStatus::Won => session.attempts().len().to_string(),
        SessionStatus::Lost | SessionStatus::InProgress => "X".to_string(),
    };

    let mut out = format!("{score}/{}\n", session.max_attempts());
    for attempt in session.attempts() {
        out.push('\n');
        out.push_str(&attempt.result.to_emoji());
    }
    out
}

/// A letter drawn as a colored tile
#[must_use]
pub fn colored_tile(letter: char, status: Option<TileStatus>) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        Some(TileStatus::Correct) => tile.black().on_green().bold(),
        Some(TileStatus::Present) => tile.black().on_yellow().bold(),
        Some(TileStatus::Absent) => tile.white().on_bright_black(),
        None => tile.bright_white(),
    }
}

/// A scored guess as a row of colored tiles
#[must_use]
pub fn colored_row(guess: &Word, result: &GuessResult) -> String {
    guess
        .letters()
        .iter()
        .zip(result.iter())
        .map(|(&letter, status)| colored_tile(char::from(letter), Some(status)).to_string())
        .collect()
}
