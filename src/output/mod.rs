//! Terminal output formatting
//!
//! Display utilities for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_round_summary, print_score_result};
