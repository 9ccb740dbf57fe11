//! Simple line-mode game
//!
//! Text-based game loop without TUI. Reads one guess per line from any
//! `BufRead`, so it can be driven by stdin or by a script.

use crate::core::Word;
use crate::game::{GameRecorder, GameSession, SessionStatus, Statistics};
use crate::output::{
    formatters::{board_text, letters_text},
    print_board, print_game_over, print_statistics, print_welcome,
};
use crate::wordlists::WordBank;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Options for the line-mode game
#[derive(Debug, Clone)]
pub struct SimpleConfig {
    pub max_attempts: usize,
    /// Target for the first game; later games draw from the bank
    pub target: Option<Word>,
    /// Append a JSON line per game to this file
    pub record_path: Option<PathBuf>,
    /// Print the plain `G`/`Y`/`X` board instead of colored tiles
    pub plain: bool,
}

impl Default for SimpleConfig {
    fn default() -> Self {
        Self {
            max_attempts: crate::game::MAX_ATTEMPTS,
            target: None,
            record_path: None,
            plain: false,
        }
    }
}

enum Input {
    Guess(String),
    NewGame,
    Quit,
    Empty,
}

/// Run the simple interactive mode until the player quits or input ends
///
/// Returns statistics for the games that finished.
///
/// # Errors
///
/// Returns an error on I/O failure, if the configured target is not in the
/// bank, or if a game record cannot be written.
pub fn run_simple<R, G>(
    bank: &WordBank,
    rng: &mut G,
    config: &SimpleConfig,
    mut reader: R,
) -> Result<Statistics>
where
    R: BufRead,
    G: Rng + ?Sized,
{
    let mut session = match &config.target {
        Some(target) => GameSession::with_max_attempts(bank, target.clone(), config.max_attempts)?,
        None => GameSession::random(bank, rng, config.max_attempts),
    };
    let mut recorder = GameRecorder::new();
    let mut stats = Statistics::default();

    print_welcome(session.word_len(), session.max_attempts());

    loop {
        if session.status().is_terminal() {
            show(&session, config.plain);
            print_game_over(&session);
            stats.record(&session);
            save_record(config, &mut recorder, &session)?;

            let Some(answer) = read_line(&mut reader, "Play again? (yes/no)")? else {
                break;
            };
            if !matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                break;
            }
            session.reset(bank.sample(rng).clone())?;
            println!("\n🔄 New game started!\n");
            continue;
        }

        let prompt = format!(
            "Attempt #{} ({} left). Enter your guess",
            session.attempts().len() + 1,
            session.attempts_remaining()
        );
        let Some(line) = read_line(&mut reader, &prompt)? else {
            break;
        };

        match parse_input(bank, &line) {
            Input::Empty => {}
            Input::Quit => break,
            Input::NewGame => {
                if session.attempts().is_empty() {
                    recorder.clear();
                } else {
                    save_record(config, &mut recorder, &session)?;
                }
                println!(
                    "Abandoned. The word was {}",
                    session.target().text().bright_yellow()
                );
                session.reset(bank.sample(rng).clone())?;
                println!("\n🔄 New game started!\n");
            }
            Input::Guess(guess) => {
                let outcome = session.submit_word(&guess);
                recorder.observe(&session, &guess, &outcome);
                match outcome {
                    Ok(result) => {
                        debug!(guess = %guess, feedback = %result, "line guess accepted");
                        if session.status() == SessionStatus::InProgress {
                            show(&session, config.plain);
                        }
                    }
                    Err(err) => println!("{} {err}\n", "Invalid guess:".red().bold()),
                }
            }
        }
    }

    if stats.total_games > 0 {
        print_statistics(&stats);
    }
    println!("\n👋 Thanks for playing!\n");
    Ok(stats)
}

/// Bank words always count as guesses; other input may be a command
fn parse_input(bank: &WordBank, line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Empty;
    }
    if bank.contains(trimmed) {
        return Input::Guess(trimmed.to_string());
    }
    match trimmed.to_lowercase().as_str() {
        "quit" | "exit" | "q" => Input::Quit,
        "new" | "n" => Input::NewGame,
        _ => Input::Guess(trimmed.to_string()),
    }
}

fn show(session: &GameSession<'_>, plain: bool) {
    if plain {
        println!("{}\n", board_text(session));
        println!("{}\n", letters_text(session.keyboard()));
    } else {
        print_board(session);
    }
}

fn save_record(
    config: &SimpleConfig,
    recorder: &mut GameRecorder,
    session: &GameSession<'_>,
) -> Result<()> {
    let record = recorder.finish(session);
    if let Some(path) = &config.record_path {
        record.append_to(path)?;
        debug!(path = %path.display(), "game record written");
    }
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead>(reader: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        warn!("input closed");
        println!();
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::io::Cursor;

    fn bank() -> WordBank {
        WordBank::load(["crane", "react", "slate", "irate", "alloy", "loyal", "grate"]).unwrap()
    }

    fn config_with_target(target: &str) -> SimpleConfig {
        SimpleConfig {
            target: Some(Word::new(target).unwrap()),
            plain: true,
            ..SimpleConfig::default()
        }
    }

    #[test]
    fn parse_input_commands() {
        let bank = bank();
        assert!(matches!(parse_input(&bank, "  "), Input::Empty));
        assert!(matches!(parse_input(&bank, "QUIT"), Input::Quit));
        assert!(matches!(parse_input(&bank, "new"), Input::NewGame));
        assert!(matches!(parse_input(&bank, "crane"), Input::Guess(_)));
        assert!(matches!(parse_input(&bank, "zzzzz"), Input::Guess(_)));
    }

    #[test]
    fn bank_words_shadow_commands() {
        let bank = WordBank::load(["new", "owl"]).unwrap();
        assert!(matches!(parse_input(&bank, "new"), Input::Guess(_)));
    }

    #[test]
    fn win_then_decline() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(0);
        let input = Cursor::new("react\ncrane\nno\n");

        let stats = run_simple(&bank, &mut rng, &config_with_target("crane"), input).unwrap();
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.wins_in(2), 1);
    }

    #[test]
    fn invalid_guesses_do_not_count() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(0);
        let input = Cursor::new("zzzzz\ncra\ncrane\nno\n");

        let stats = run_simple(&bank, &mut rng, &config_with_target("crane"), input).unwrap();
        assert_eq!(stats.wins_in(1), 1);
    }

    #[test]
    fn six_misses_lose() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(0);
        let input = Cursor::new("react\nslate\nirate\nalloy\nloyal\ngrate\nno\n");

        let stats = run_simple(&bank, &mut rng, &config_with_target("crane"), input).unwrap();
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 0);
    }

    #[test]
    fn quit_and_eof_end_the_loop() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(0);

        let config = config_with_target("crane");

        let stats = run_simple(&bank, &mut rng, &config, Cursor::new("quit\n")).unwrap();
        assert_eq!(stats.total_games, 0);

        let stats = run_simple(&bank, &mut rng, &config, Cursor::new("react\n")).unwrap();
        assert_eq!(stats.total_games, 0);
    }

    #[test]
    fn rejects_target_outside_bank() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(0);
        let result = run_simple(&bank, &mut rng, &config_with_target("zebra"), Cursor::new(""));
        assert!(result.is_err());
    }
}
