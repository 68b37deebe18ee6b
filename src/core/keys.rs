//! Keyboard letter status aggregation
//!
//! Each letter shows the best hint it has ever received in the round.

use super::{Feedback, Hint, Word};

const ALPHABET_SIZE: usize = 26;

/// Best hint seen so far for every letter A-Z
///
/// `None` means the letter has not been guessed yet. Statuses only move up
/// the `Absent < Present < Correct` ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyStatuses {
    best: [Option<Hint>; ALPHABET_SIZE],
}

impl KeyStatuses {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate statuses over a sequence of scored guesses
    pub fn from_guesses<'a, I>(guesses: I) -> Self
    where
        I: IntoIterator<Item = (&'a Word, &'a Feedback)>,
    {
        let mut statuses = Self::new();
        for (word, feedback) in guesses {
            statuses.record(word, feedback);
        }
        statuses
    }

    /// Fold one scored guess into the statuses
    pub fn record(&mut self, word: &Word, feedback: &Feedback) {
        for (&letter, &hint) in word.letters().iter().zip(feedback.hints()) {
            if let Some(slot) = Self::index(letter).map(|i| &mut self.best[i]) {
                *slot = (*slot).max(Some(hint));
            }
        }
    }

    /// Status of a letter, case-insensitive; `None` if never guessed or not a letter
    #[must_use]
    pub fn status(&self, letter: char) -> Option<Hint> {
        u8::try_from(letter)
            .ok()
            .and_then(Self::index)
            .and_then(|i| self.best[i])
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| usize::from(letter.to_ascii_uppercase() - b'A'))
    }
}
