//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and testable in isolation.

mod feedback;
mod keys;
mod word;

pub use feedback::{Feedback, Hint};
pub use keys::KeyStatuses;
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of accepted guesses allowed per round
pub const MAX_GUESSES: usize = 6;
