//! Display functions for games and command results

use super::formatters::{colored_row, colored_tile, share_text};
use crate::commands::CheckResult;
use crate::core::TileStatus;
use crate::game::{GameSession, SessionStatus, Statistics};
use colored::Colorize;

/// Print the rules banner
pub fn print_welcome(word_len: usize, max_attempts: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORDLE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("Guess the {word_len}-letter word in {max_attempts} tries.");
    println!(
        "Feedback: {} correct  {} present  {} absent",
        colored_tile('G', Some(TileStatus::Correct)),
        colored_tile('Y', Some(TileStatus::Present)),
        colored_tile('X', Some(TileStatus::Absent)),
    );
    println!("Commands: 'new' for a new game, 'quit' to exit\n");
}

/// Print every scored row followed by the keyboard
pub fn print_board(session: &GameSession<'_>) {
    println!();
    for attempt in session.attempts() {
        println!("  {}", colored_row(&attempt.guess, &attempt.result));
    }
    for _ in session.attempts().len()..session.max_attempts() {
        println!("  {}", " · ".repeat(session.word_len()).bright_black());
    }
    println!();
    print_keyboard(session);
}

/// Print a QWERTY keyboard colored by best status
pub fn print_keyboard(session: &GameSession<'_>) {
    for (indent, row) in [(0, "QWERTYUIOP"), (1, "ASDFGHJKL"), (3, "ZXCVBNM")] {
        let keys: String = row
            .chars()
            .map(|key| colored_tile(key, session.keyboard().status(key)).to_string())
            .collect();
        println!("  {}{keys}", " ".repeat(indent));
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_game_over(session: &GameSession<'_>) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match session.status() {
        SessionStatus::Won => {
            let used = session.attempts().len();
            println!(
                "{}",
                format!(
                    "🎉 Solved in {used} {}!",
                    if used == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
        }
        SessionStatus::Lost => {
            println!(
                "{} {}",
                "Game over! The word was".red().bold(),
                session.target().text().bright_yellow().bold()
            );
        }
        SessionStatus::InProgress => {
            println!(
                "Game abandoned. The word was {}",
                session.target().text().bright_yellow()
            );
        }
    }
    println!("\n{}", share_text(session));
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print running statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:   {}", stats.total_games);
    println!("   Won:      {}", stats.games_won);
    println!("   Win rate: {:.0}%", stats.win_rate());

    if stats.games_won == 0 {
        return;
    }
    for (attempts, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let pct = count as f64 / stats.games_won as f64 * 100.0;
        let bar_width = (pct / 5.0) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(20_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {attempts}: {bar} {count:3}");
    }
}

/// Print the result of a one-off check
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{} {}  {} {}",
        "Target:".bright_cyan(),
        result.target.text().bright_yellow().bold(),
        "Guess:".bright_cyan(),
        result.guess.text().bright_white().bold()
    );
    println!("\n  {}", colored_row(&result.guess, &result.result));
    println!("  {}  {}\n", result.result.to_emoji(), result.result);
}
