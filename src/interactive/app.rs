//! TUI application state and logic

use crate::game::{GameSession, GuessError, SessionStatus, Statistics};
use crate::wordlists::WordBank;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    rng: StdRng,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    /// Last submission was rejected; the pending row is shown as invalid
    pub rejected: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Start with a random target drawn from `bank`
    #[must_use]
    pub fn new(bank: &'a WordBank, mut rng: StdRng, max_attempts: usize) -> Self {
        let session = GameSession::random(bank, &mut rng, max_attempts);
        let mut app = Self {
            session,
            rng,
            messages: Vec::new(),
            stats: Statistics::default(),
            rejected: false,
            should_quit: false,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word in {} tries!",
                app.session.word_len(),
                app.session.max_attempts()
            ),
            MessageStyle::Info,
        );
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.session.status().is_terminal() {
            match key.code {
                KeyCode::Char('n' | 'N') => self.new_game(),
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
            KeyCode::Char(c) => {
                if let Ok(true) = self.session.append_letter(c) {
                    self.rejected = false;
                }
            }
            KeyCode::Backspace => {
                if self.session.delete_letter().is_some() {
                    self.rejected = false;
                }
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.session.submit() {
            Ok(result) => {
                self.rejected = false;
                debug!(feedback = %result, "tui guess accepted");
                if self.session.status().is_terminal() {
                    self.finish_game();
                }
            }
            Err(err) => {
                self.rejected = !matches!(err, GuessError::IncompleteGuess { .. });
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_game(&mut self) {
        self.stats.record(&self.session);
        match self.session.status() {
            SessionStatus::Won => {
                let celebration = match self.session.attempts().len() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            SessionStatus::Lost => {
                let text = format!("Out of tries. The word was {}", self.session.target());
                self.add_message(&text, MessageStyle::Error);
            }
            SessionStatus::InProgress => return,
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Replace the session with a fresh one; statistics carry over
    pub fn new_game(&mut self) {
        let target = self.session.bank().sample(&mut self.rng).clone();
        if let Err(err) = self.session.reset(target) {
            self.add_message(&err.to_string(), MessageStyle::Error);
            return;
        }
        info!(games = self.stats.total_games, "tui new game");
        self.rejected = false;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// Returns the statistics of the games finished before quitting.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Statistics> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal before reporting anything
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn bank() -> WordBank {
        WordBank::load(["crane", "react", "slate", "irate", "alloy", "loyal", "grate"]).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn app_with_target<'a>(bank: &'a WordBank, target: &str) -> App<'a> {
        let mut app = App::new(bank, StdRng::seed_from_u64(7), 6);
        app.session
            .reset(crate::core::Word::new(target).unwrap())
            .unwrap();
        app
    }

    #[test]
    fn typing_and_backspace_edit_pending_row() {
        let bank = bank();
        let mut app = app_with_target(&bank, "crane");

        for c in "slatex".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.session.pending(), "SLATE");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.pending(), "SLAT");
    }

    #[test]
    fn unknown_word_marks_row_invalid() {
        let bank = bank();
        let mut app = app_with_target(&bank, "crane");

        type_word(&mut app, "zzzzz");
        assert!(app.rejected);
        assert_eq!(app.session.pending(), "ZZZZZ");
        assert!(app.session.attempts().is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);

        press(&mut app, KeyCode::Backspace);
        assert!(!app.rejected);
    }

    #[test]
    fn short_row_is_reported_but_not_invalid() {
        let bank = bank();
        let mut app = app_with_target(&bank, "crane");

        type_word(&mut app, "cra");
        assert!(!app.rejected);
        assert_eq!(app.session.pending(), "CRA");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn win_records_stats_and_n_starts_new_game() {
        let bank = bank();
        let mut app = app_with_target(&bank, "crane");

        type_word(&mut app, "react");
        type_word(&mut app, "crane");
        assert_eq!(app.session.status(), SessionStatus::Won);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.wins_in(2), 1);

        // Letters are ignored once the game is over
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.session.pending(), "");

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.status(), SessionStatus::InProgress);
        assert!(app.session.attempts().is_empty());
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn modified_letters_are_not_typed() {
        let bank = bank();
        let mut app = app_with_target(&bank, "crane");

        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT));
        assert_eq!(app.session.pending(), "");
        assert!(!app.should_quit);

        app.handle_key(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT));
        assert_eq!(app.session.pending(), "C");
    }

    #[test]
    fn quit_keys() {
        let bank = bank();

        let mut app = app_with_target(&bank, "crane");
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.session.pending(), "Q");

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = app_with_target(&bank, "crane");
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn loss_then_q_quits() {
        let bank = bank();
        let mut app = app_with_target(&bank, "crane");

        for word in ["react", "slate", "irate", "alloy", "loyal", "grate"] {
            type_word(&mut app, word);
        }
        assert_eq!(app.session.status(), SessionStatus::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
