//! Formatting utilities for terminal output

use crate::core::{Hint, KeyStatuses, MAX_GUESSES};
use crate::game::HistoryEntry;
use colored::{ColoredString, Colorize};

/// On-screen keyboard rows, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Render one letter as a coloured tile like ` A `
#[must_use]
pub fn letter_tile(letter: char, hint: Option<Hint>) -> ColoredString {
    let tile = format!(" {letter} ");
    let tile = tile.as_str();
    match hint {
        Some(Hint::Correct) => tile.black().on_green().bold(),
        Some(Hint::Present) => tile.black().on_yellow().bold(),
        Some(Hint::Absent) => tile.white().on_bright_black(),
        None => tile.bold(),
    }
}

/// Render a scored guess as a row of coloured tiles
#[must_use]
pub fn guess_row(entry: &HistoryEntry) -> String {
    entry
        .word
        .as_str()
        .chars()
        .zip(entry.feedback.hints())
        .map(|(letter, &hint)| letter_tile(letter, Some(hint)).to_string())
        .collect()
}

/// Render the keyboard with each key coloured by its best hint
#[must_use]
pub fn keyboard_rows(statuses: &KeyStatuses) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|key| letter_tile(key, statuses.status(key)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Emoji grid for sharing a finished round, headed by the score line
///
/// A lost round scores `X/6`.
#[must_use]
pub fn share_grid(history: &[HistoryEntry], won: bool) -> String {
    let score = if won {
        history.len().to_string()
    } else {
        "X".to_string()
    };

    let mut lines = vec![format!("Wordle {score}/{MAX_GUESSES}")];
    lines.extend(history.iter().map(|entry| entry.feedback.to_emoji()));
    lines.join("\n")
}
