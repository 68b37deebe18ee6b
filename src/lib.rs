//! Wordle Game
//!
//! A five-letter word guessing game: an evaluation engine with no I/O, plus
//! terminal front ends that drive it.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::{Dictionary, GuessEngine, SubmitOutcome};
//!
//! let dictionary = Dictionary::new(["crane", "slate"]).unwrap();
//! let mut engine = GuessEngine::with_answer(&dictionary, "slate").unwrap();
//!
//! for letter in "crane".chars() {
//!     engine.append_letter(letter);
//! }
//! if let SubmitOutcome::Accepted { feedback, is_win } = engine.submit_guess() {
//!     println!("{feedback} win: {is_win}");
//! }
//! ```

// Core domain types
pub mod core;

// Dictionary and round engine
pub mod game;

// Word lists
pub mod wordlists;

// In-session statistics
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
