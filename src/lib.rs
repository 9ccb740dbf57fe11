//! Wordle Game
//!
//! A Wordle guess-evaluation engine and turn/session state machine, with a
//! terminal UI and a line-mode front end.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{GuessResult, Word};
//! use wordle_game::game::{GameSession, SessionStatus};
//! use wordle_game::wordlists::WordBank;
//!
//! // Score a single guess
//! let target = Word::new("crane").unwrap();
//! let guess = Word::new("react").unwrap();
//! assert_eq!(GuessResult::evaluate(&target, &guess).to_string(), "YYGYX");
//!
//! // Play a whole game
//! let bank = WordBank::load(["crane", "react", "slate"]).unwrap();
//! let mut session = GameSession::begin(&bank, target).unwrap();
//! session.submit_word("slate").unwrap();
//! session.submit_word("crane").unwrap();
//! assert_eq!(session.status(), SessionStatus::Won);
//! ```

// Core domain types
pub mod core;

// Session state machine, statistics and records
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
