//! Game rounds: dictionary, guess evaluation and round lifecycle

mod dictionary;
mod engine;
mod error;

pub use dictionary::Dictionary;
pub use engine::{GuessEngine, HistoryEntry, RoundStatus, SubmitOutcome};
pub use error::{ConfigurationError, RejectReason};
