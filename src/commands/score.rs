//! Score a single guess
//!
//! Computes the hints one guess would receive against a chosen answer.

use crate::core::{Feedback, Word};
use anyhow::{Context, Result};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `answer`
///
/// Neither word has to be in a dictionary, only well formed.
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn score_guess(guess: &str, answer: &str) -> Result<ScoreResult> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess {guess:?}"))?;
    let answer = Word::new(answer).with_context(|| format!("invalid answer {answer:?}"))?;
    let feedback = Feedback::calculate(&guess, &answer);

    Ok(ScoreResult {
        guess,
        answer,
        feedback,
    })
}
