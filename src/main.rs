//! Wordle Game - CLI
//!
//! Play Wordle in a full-screen TUI or a plain line mode, or score a single
//! guess against a target.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use std::io;
use std::path::PathBuf;
use tracing::info;
use wordle_game::{
    commands::{SimpleConfig, check_guess, run_simple},
    core::Word,
    game::{ATTEMPT_LIMIT, MAX_ATTEMPTS},
    logging::{self, LogTarget},
    output::{print_check_result, print_statistics},
    wordlists::{
        WordBank,
        loader::{load_embedded, load_from_file},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle in the terminal: guess the hidden word in a limited number of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a word list (one word per line); defaults to the built-in list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for target selection, for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Number of attempts per game
    #[arg(
        short,
        long,
        global = true,
        default_value_t = MAX_ATTEMPTS as u64,
        value_parser = clap::value_parser!(u64).range(1..=ATTEMPT_LIMIT as u64)
    )]
    attempts: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file (the only log output in TUI mode)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (one guess per line, no TUI)
    Simple {
        /// Target word for the first game
        #[arg(short, long)]
        target: Option<String>,

        /// Append a JSON line per finished game to this file
        #[arg(short, long)]
        record: Option<PathBuf>,

        /// Print the G/Y/X text board instead of colored tiles
        #[arg(long)]
        plain: bool,
    },

    /// Score one guess against a target
    Check {
        /// The hidden word
        target: String,

        /// The guess to score
        guess: String,
    },
}

fn load_bank(path: Option<&PathBuf>) -> Result<WordBank> {
    match path {
        Some(path) => load_from_file(path),
        None => load_embedded(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let log_target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path.as_path()),
        (None, Commands::Play) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(cli.verbose, log_target)?;

    let bank = load_bank(cli.wordlist.as_ref())?;
    info!(words = bank.len(), word_len = bank.word_len(), "word list loaded");

    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let attempts = usize::try_from(cli.attempts)?;

    match command {
        Commands::Play => run_play_command(&bank, rng, attempts),
        Commands::Simple {
            target,
            record,
            plain,
        } => run_simple_command(&bank, rng, attempts, target.as_deref(), record, plain),
        Commands::Check { target, guess } => run_check_command(&bank, &target, &guess),
    }
}

fn run_play_command(bank: &WordBank, rng: StdRng, attempts: usize) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(bank, rng, attempts);
    let stats = run_tui(app)?;
    if stats.total_games > 0 {
        print_statistics(&stats);
    }
    Ok(())
}

fn run_simple_command(
    bank: &WordBank,
    mut rng: StdRng,
    attempts: usize,
    target: Option<&str>,
    record_path: Option<PathBuf>,
    plain: bool,
) -> Result<()> {
    let target = target
        .map(Word::new)
        .transpose()
        .map_err(|e| anyhow::anyhow!("Invalid target: {e}"))?;

    let config = SimpleConfig {
        max_attempts: attempts,
        target,
        record_path,
        plain,
    };
    run_simple(bank, &mut rng, &config, io::stdin().lock())?;
    Ok(())
}

fn run_check_command(bank: &WordBank, target: &str, guess: &str) -> Result<()> {
    let result = check_guess(bank, target, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}
