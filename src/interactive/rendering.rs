//! TUI rendering with ratatui
//!
//! Board, keyboard and popups for the game. Colours are chosen here from the
//! engine's hints; the engine itself knows nothing about them.

use super::app::{App, MessageStyle};
use crate::core::{Hint, KeyStatuses, MAX_GUESSES, WORD_LENGTH};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                          // Header
            Constraint::Length(MAX_GUESSES as u16 * 2 + 1), // Board
            Constraint::Length(5),                          // Keyboard
            Constraint::Min(4),                             // Messages
            Constraint::Length(1),                          // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, &app.engine.key_statuses(), chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if let Some(ref dialog) = app.dialog {
        let color = if dialog.won { Color::Green } else { Color::Yellow };
        render_popup(
            f,
            &dialog.title,
            &dialog.text,
            "Enter/n: Play Again | Esc: Close | q: Quit",
            color,
        );
    } else if let Some(ref warning) = app.warning {
        render_popup(f, "Warning", &warning.text, "Esc: Close", Color::Red);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::White)
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

/// Background and foreground for a scored tile
const fn hint_colors(hint: Hint) -> (Color, Color) {
    match hint {
        Hint::Correct => (Color::Green, Color::White),
        Hint::Present => (Color::Yellow, Color::Black),
        Hint::Absent => (Color::DarkGray, Color::White),
    }
}

fn tile(letter: char, hint: Option<Hint>) -> Span<'static> {
    let style = match hint {
        Some(hint) => {
            let (bg, fg) = hint_colors(hint);
            Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD)
        }
        None => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    };
    Span::styled(format!(" {letter} "), style)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let engine = &app.engine;
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);

    for row in 0..MAX_GUESSES {
        let spans: Vec<Span> = if let Some(entry) = engine.history().get(row) {
            entry
                .word
                .as_str()
                .chars()
                .zip(entry.feedback.hints())
                .flat_map(|(letter, &hint)| [tile(letter, Some(hint)), Span::raw(" ")])
                .collect()
        } else if row == engine.history().len() && !engine.is_over() {
            // Row being typed; highlight the next free cell
            let typed: Vec<char> = engine.current_buffer().chars().collect();
            (0..WORD_LENGTH)
                .flat_map(|col| {
                    let cell = match typed.get(col) {
                        Some(&letter) => tile(letter, None),
                        None if col == typed.len() => Span::styled(
                            " _ ",
                            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                        ),
                        None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                    };
                    [cell, Span::raw(" ")]
                })
                .collect()
        } else {
            (0..WORD_LENGTH)
                .flat_map(|_| {
                    [
                        Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                        Span::raw(" "),
                    ]
                })
                .collect()
        };

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, statuses: &KeyStatuses, area: Rect) {
    let mut lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|key| {
                    let span = match statuses.status(key) {
                        Some(hint) => tile(key, Some(hint)),
                        None => Span::styled(
                            format!(" {key} "),
                            Style::default().bg(Color::Blue).fg(Color::White),
                        ),
                    };
                    [span, Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    lines.push(Line::from(Span::styled(
        "[ENTER] submit   [BACKSPACE] delete",
        Style::default().fg(Color::DarkGray),
    )));

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(keyboard, area);
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
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let remaining = Paragraph::new(format!(
        "Guesses left: {}",
        app.engine.remaining_guesses()
    ))
    .alignment(Alignment::Center);
    f.render_widget(remaining, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.engine.is_over() {
        "Esc: Quit | Enter: New Game"
    } else {
        "Esc: Quit | Enter: Submit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_popup(f: &mut Frame, title: &str, text: &str, help: &str, color: Color) {
    let area = centered_rect(50, 7, f.area());

    let content = vec![
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            help.to_string(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rectangle of `percent_x` width and `height` rows centred in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
