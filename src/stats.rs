//! In-session statistics
//!
//! Kept in memory by a front end for as long as it runs; nothing is saved.

use crate::core::MAX_GUESSES;
use crate::game::{GuessEngine, RoundStatus};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// Index `n` counts wins on guess `n`; index 0 is unused
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    /// Count a finished round; rounds still in progress are ignored
    pub fn record(&mut self, engine: &GuessEngine) {
        match engine.status() {
            RoundStatus::InProgress => {}
            RoundStatus::Lost => self.games_played += 1,
            RoundStatus::Won => {
                self.games_played += 1;
                self.games_won += 1;
                self.guess_distribution[engine.history().len()] += 1;
            }
        }
    }

    /// Percentage of played rounds that were won
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Round counts stay far below 2^52
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
