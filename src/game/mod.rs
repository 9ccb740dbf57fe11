//! Game sessions
//!
//! The turn state machine plus the bookkeeping that rides on top of it.

pub mod record;
mod session;
mod stats;

pub use record::{GameRecord, GameRecorder};
pub use session::{
    ATTEMPT_LIMIT, Attempt, GameSession, GuessError, MAX_ATTEMPTS, SessionStatus, TargetError,
};
pub use stats::Statistics;
