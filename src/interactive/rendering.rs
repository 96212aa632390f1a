//! TUI rendering with ratatui
//!
//! Board tiles, virtual keyboard, and the result summary.

use super::app::{App, MessageStyle};
use crate::core::Verdict;
use crate::game::KeyState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Header
            Constraint::Length(14), // Board
            Constraint::Length(2),  // Message
            Constraint::Length(5),  // Keyboard
            Constraint::Min(1),     // Footer / result
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_message(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    if app.is_finished() {
        render_result(f, app, chunks[4]);
    } else {
        render_footer(f, chunks[4]);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let mins = app.elapsed_seconds / 60;
    let secs = app.elapsed_seconds % 60;

    let mut line = vec![Span::styled(
        "W O R D L E",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    line.push(Span::raw("   "));
    line.push(Span::styled(
        app.username.clone(),
        Style::default().fg(Color::Green),
    ));
    if app.streak > 0 {
        line.push(Span::raw("  "));
        line.push(Span::styled(
            format!("🔥{}", app.streak),
            Style::default().fg(Color::LightRed),
        ));
    }

    let content = vec![
        Line::from(line),
        Line::from(Span::styled(
            format!("⏱ {mins}:{secs:02}"),
            Style::default().fg(Color::Yellow),
        )),
    ];

    let header = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Plain),
    );
    f.render_widget(header, area);
}

fn verdict_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(12);

    for row in 0..6 {
        let mut spans = Vec::with_capacity(10);
        for col in 0..5 {
            if col > 0 {
                spans.push(Span::raw(" "));
            }
            let cell = app.board.letter(row, col).map(|b| b as char);
            let span = if row < app.board.verdicts().len() {
                let verdict = app.board.verdicts()[row][col];
                Span::styled(
                    format!(" {} ", cell.unwrap_or(' ')),
                    verdict_style(verdict),
                )
            } else {
                match cell {
                    Some(ch) => Span::styled(
                        format!(" {ch} "),
                        Style::default()
                            .fg(Color::White)
                            .bg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    ),
                    None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                }
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
        lines.push(Line::default()); // Breathing room between rows
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(board, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let Some(ref message) = app.message else {
        return;
    };

    let color = match message.style {
        MessageStyle::Info => Color::White,
        MessageStyle::Warning => Color::Yellow,
        MessageStyle::Success => Color::Green,
    };

    let paragraph = Paragraph::new(Span::styled(
        message.text.clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn key_style(state: KeyState) -> Style {
    match state {
        KeyState::Unused => Style::default().fg(Color::White).bg(Color::Gray),
        KeyState::Absent => Style::default().fg(Color::White).bg(Color::Black),
        KeyState::Present => Style::default().fg(Color::White).bg(Color::Yellow),
        KeyState::Correct => Style::default().fg(Color::White).bg(Color::Green),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(5);

    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let mut spans = Vec::new();
        for (j, ch) in row.chars().enumerate() {
            if j > 0 {
                spans.push(Span::raw(" "));
            }
            let state = app.keyboard.state(ch as u8);
            spans.push(Span::styled(format!(" {ch} "), key_style(state)));
        }
        lines.push(Line::from(spans));
        if i < KEYBOARD_ROWS.len() - 1 {
            lines.push(Line::default());
        }
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(keyboard, area);
}

fn render_result(f: &mut Frame, app: &App, area: Rect) {
    let Some(ref view) = app.finished else {
        return;
    };

    let headline = if view.won {
        Span::styled(
            format!("Solved in {}/6", view.attempts),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "Out of guesses",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    };

    let mut details = Vec::new();
    if let Some(secs) = view.time_seconds {
        details.push(format!("{}:{:02}", secs / 60, secs % 60));
    }
    if let Some(rank) = view.rank {
        details.push(format!("#{rank} today"));
    }
    details.push(format!(
        "streak {} (best {})",
        view.streak_current, view.streak_longest
    ));

    let content = vec![
        Line::from(headline),
        Line::from(details.join("  ·  ")),
        Line::from(Span::styled(
            "Enter/q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Span::styled(
        "Type a word · Enter: submit · Backspace: erase · Esc: quit",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    f.render_widget(footer, area);
}
