//! Word lists for Wordle
//!
//! Provides the embedded default dictionary and loading from external files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
