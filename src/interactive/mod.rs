//! Interactive TUI game
//!
//! Full-screen ratatui front end over a `GameSession`.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
