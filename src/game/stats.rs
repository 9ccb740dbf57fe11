//! Win/attempt statistics across the games of one run

use super::{GameSession, SessionStatus};

/// Running totals for finished games
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` counts games won in `n` attempts
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Count a session if it has finished
    ///
    /// Returns false (and records nothing) for a game still in progress.
    pub fn record(&mut self, session: &GameSession<'_>) -> bool {
        match session.status() {
            SessionStatus::InProgress => false,
            SessionStatus::Lost => {
                self.total_games += 1;
                true
            }
            SessionStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;
                let used = session.attempts().len();
                if self.guess_distribution.len() <= used {
                    self.guess_distribution.resize(used + 1, 0);
                }
                self.guess_distribution[used] += 1;
                true
            }
        }
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.games_won as f64 / self.total_games as f64 * 100.0
    }

    /// Games won in exactly `attempts` guesses
    #[must_use]
    pub fn wins_in(&self, attempts: usize) -> usize {
        self.guess_distribution.get(attempts).copied().unwrap_or(0)
    }
}
