//! Core domain types for the game
//!
//! This module contains the fundamental domain types: words, per-tile feedback
//! and the keyboard tracker. Everything here is pure and has no I/O.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{GuessResult, TileStatus};
pub use keyboard::KeyboardState;
pub use word::{Word, WordError};
