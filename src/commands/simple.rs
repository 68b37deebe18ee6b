//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line typed is one guess.

use crate::core::WORD_LENGTH;
use crate::game::{Dictionary, GuessEngine, RejectReason, SubmitOutcome};
use crate::output::{print_board, print_round_summary};
use crate::stats::Statistics;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the line-based game until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading from stdin or flushing stdout fails.
pub fn run_simple<R: Rng + ?Sized>(dictionary: &Dictionary, rng: &mut R) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║            W O R D L E               ║");
    println!("╚══════════════════════════════════════╝\n");
    println!("Guess the hidden five-letter word in six tries.");
    println!("Commands: 'quit' to exit, 'new' to give up and start over\n");

    let mut stats = Statistics::default();
    let mut engine = GuessEngine::with_rng(dictionary, rng);

    loop {
        print_board(&engine);

        let prompt = format!("Guess {}", engine.history().len() + 1);
        let Some(line) = get_user_input(&prompt)? else {
            println!();
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                println!("\nThe word was {}.", engine.answer().as_str().bold());
                engine = GuessEngine::with_rng(dictionary, rng);
                println!("🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        if let SubmitOutcome::Rejected(reason) = submit_line(&mut engine, &line) {
            println!("{}", format!("❌ {reason}").red());
            continue;
        }

        if engine.is_over() {
            stats.record(&engine);
            print_board(&engine);
            print_round_summary(&engine);
            println!(
                "Played: {} | Win rate: {:.0}%\n",
                stats.games_played,
                stats.win_rate()
            );

            match get_user_input("Play again? (yes/no)")?
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    engine = GuessEngine::with_rng(dictionary, rng);
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Replace the buffer with `line` and submit it
///
/// A whole line is one guess, so it is rejected untouched unless it is
/// exactly `WORD_LENGTH` ASCII letters.
pub fn submit_line(engine: &mut GuessEngine, line: &str) -> SubmitOutcome {
    while !engine.current_buffer().is_empty() {
        engine.remove_last_letter();
    }

    if !line.chars().all(|c| c.is_ascii_alphabetic()) || line.len() > WORD_LENGTH {
        return SubmitOutcome::Rejected(RejectReason::NotInDictionary);
    }
    if line.len() < WORD_LENGTH {
        return SubmitOutcome::Rejected(RejectReason::TooShort);
    }

    for letter in line.chars() {
        engine.append_letter(letter);
    }
    engine.submit_guess()
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_line_accepts_dictionary_word() {
        let dictionary = Dictionary::new(["crane", "slate"]).unwrap();
        let mut engine = GuessEngine::with_answer(&dictionary, "slate").unwrap();

        let outcome = submit_line(&mut engine, "crane");
        assert!(matches!(outcome, SubmitOutcome::Accepted { is_win: false, .. }));
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn submit_line_replaces_previous_rejected_buffer() {
        let dictionary = Dictionary::new(["crane", "slate"]).unwrap();
        let mut engine = GuessEngine::with_answer(&dictionary, "slate").unwrap();

        assert_eq!(
            submit_line(&mut engine, "zzzzz"),
            SubmitOutcome::Rejected(RejectReason::NotInDictionary)
        );
        assert_eq!(engine.current_buffer(), "ZZZZZ");

        let outcome = submit_line(&mut engine, "slate");
        assert!(matches!(outcome, SubmitOutcome::Accepted { is_win: true, .. }));
    }

    #[test]
    fn submit_line_rejects_lines_that_are_not_one_word() {
        let dictionary = Dictionary::new(["crane", "slate"]).unwrap();
        let mut engine = GuessEngine::with_answer(&dictionary, "slate").unwrap();

        assert_eq!(
            submit_line(&mut engine, "cranes"),
            SubmitOutcome::Rejected(RejectReason::NotInDictionary)
        );
        assert_eq!(
            submit_line(&mut engine, "slate!!xyz"),
            SubmitOutcome::Rejected(RejectReason::NotInDictionary)
        );
        assert_eq!(
            submit_line(&mut engine, "sl-te"),
            SubmitOutcome::Rejected(RejectReason::NotInDictionary)
        );
        assert_eq!(
            submit_line(&mut engine, "cran"),
            SubmitOutcome::Rejected(RejectReason::TooShort)
        );

        assert!(engine.history().is_empty());
        assert_eq!(engine.remaining_guesses(), 6);
        assert!(!engine.is_over());
    }
}
