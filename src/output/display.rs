//! Display functions for command results

use super::formatters::{guess_row, keyboard_rows, letter_tile, share_grid};
use crate::core::{Feedback, MAX_GUESSES, WORD_LENGTH, Word};
use crate::game::{GuessEngine, RoundStatus};
use colored::Colorize;

/// Print the hints for a single guess against an answer
pub fn print_score_result(guess: &Word, answer: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.as_str().bright_yellow().bold(),
        answer.as_str().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let row: String = guess
        .as_str()
        .chars()
        .zip(feedback.hints())
        .map(|(letter, &hint)| letter_tile(letter, Some(hint)).to_string())
        .collect();
    println!("\n  {row}");
    println!("  {feedback}\n");

    if feedback.is_win() {
        println!("{}", "✅ Exact match".green().bold());
    }
}

/// Print the board: scored rows, the row being typed, then blank rows
pub fn print_board(engine: &GuessEngine) {
    println!();
    for entry in engine.history() {
        println!("  {}", guess_row(entry));
    }

    if !engine.is_over() {
        let typed = engine.current_buffer();
        let pending: String = typed
            .chars()
            .chain(std::iter::repeat('_'))
            .take(WORD_LENGTH)
            .map(|letter| letter_tile(letter, None).to_string())
            .collect();
        println!("  {pending}");
    }

    let shown = engine.history().len() + usize::from(!engine.is_over());
    for _ in shown..MAX_GUESSES {
        println!("  {}", " · ".repeat(WORD_LENGTH).bright_black());
    }

    println!();
    for row in keyboard_rows(&engine.key_statuses()) {
        println!("  {row}");
    }
    println!();
}

/// Print the end-of-round banner with the share grid
pub fn print_round_summary(engine: &GuessEngine) {
    let won = engine.status() == RoundStatus::Won;

    println!("{}", "═".repeat(40).bright_cyan());
    if won {
        println!(
            "{}",
            format!(
                "🎉 You win! Guessed in {}/{MAX_GUESSES} tries.",
                engine.history().len()
            )
            .bright_green()
            .bold()
        );
    } else {
        println!(
            "{} {}",
            "Game over! The word was".bright_yellow().bold(),
            engine.answer().as_str().bright_white().bold()
        );
    }
    println!("{}", "═".repeat(40).bright_cyan());
    println!("\n{}\n", share_grid(engine.history(), won));
}
