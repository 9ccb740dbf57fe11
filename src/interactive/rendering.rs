//! TUI rendering with ratatui
//!
//! Tile grid, on-screen keyboard and message log for the game.

use super::app::{App, MessageStyle};
use crate::core::{KeyboardState, TileStatus};
use crate::game::SessionStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, app.session.keyboard(), chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(status: Option<TileStatus>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match status {
        Some(TileStatus::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(TileStatus::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(TileStatus::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn tile(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {letter} "), style)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let word_len = session.word_len();
    let mut lines = Vec::new();

    for attempt in session.attempts() {
        let spans = attempt
            .guess
            .text()
            .chars()
            .zip(attempt.result.iter())
            .flat_map(|(letter, status)| [tile(letter, tile_style(Some(status))), Span::raw(" ")])
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let mut remaining = session.attempts_remaining();
    if session.status() == SessionStatus::InProgress && remaining > 0 {
        let style = if app.rejected {
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        let spans = session
            .pending()
            .chars()
            .chain(std::iter::repeat('_'))
            .take(word_len)
            .flat_map(|letter| [tile(letter, style), Span::raw(" ")])
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
        lines.push(Line::default());
        remaining -= 1;
    }

    for _ in 0..remaining {
        let spans = (0..word_len)
            .flat_map(|_| [tile('·', Style::default().fg(Color::DarkGray)), Span::raw(" ")])
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let title = match session.status() {
        SessionStatus::InProgress => " Board ".to_string(),
        SessionStatus::Won => " 🎉 Solved! ".to_string(),
        SessionStatus::Lost => format!(" The word was {} ", session.target()),
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardState, area: Rect) {
    let lines = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans = row
                .chars()
                .flat_map(|letter| [tile(letter, tile_style(keyboard.status(letter))), Span::raw(" ")])
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(40),
            Constraint::Percentage(35),
        ])
        .split(area);

    let session = &app.session;
    let attempt = (session.attempts().len() + 1).min(session.max_attempts());
    let attempt_text = format!("Attempt {attempt}/{}", session.max_attempts());
    let attempt = Paragraph::new(attempt_text).alignment(Alignment::Center);
    f.render_widget(attempt, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if session.status().is_terminal() {
        "q: Quit | n: New Game"
    } else {
        "Enter: Submit | Bksp: Delete | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordBank;
    use rand::{SeedableRng, rngs::StdRng};
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_board_keyboard_and_status() {
        let bank = WordBank::load(["crane", "react", "slate"]).unwrap();
        let mut app = App::new(&bank, StdRng::seed_from_u64(1), 6);
        app.session
            .reset(crate::core::Word::new("crane").unwrap())
            .unwrap();
        app.session.submit_word("react").unwrap();

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Board"));
        assert!(text.contains("Keyboard"));
        assert!(text.contains("Attempt 2/6"));
        assert!(text.contains(" R "));
    }

    #[test]
    fn draws_with_largest_attempt_limit() {
        let bank = WordBank::load(["crane", "react", "slate"]).unwrap();
        let app = App::new(&bank, StdRng::seed_from_u64(1), usize::MAX);

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("Attempt 1/32"));
    }

    #[test]
    fn tile_colors_follow_status() {
        assert_eq!(tile_style(Some(TileStatus::Correct)).bg, Some(Color::Green));
        assert_eq!(tile_style(Some(TileStatus::Present)).bg, Some(Color::Yellow));
        assert_eq!(tile_style(Some(TileStatus::Absent)).bg, Some(Color::DarkGray));
        assert_eq!(tile_style(None).bg, None);
    }
}
