//! Error and rejection types for rounds and dictionaries

use crate::core::{WORD_LENGTH, WordError};
use std::fmt;
use thiserror::Error;

/// A dictionary that cannot be used to start a round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("dictionary contains no words")]
    Empty,
    #[error("dictionary entry {word:?} is not a valid {}-letter word", WORD_LENGTH)]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },
    #[error("answer {0:?} is not in the dictionary")]
    AnswerNotInDictionary(String),
}

/// Why a submission was refused
///
/// Rejections leave the buffer and history untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Fewer than five letters typed
    TooShort,
    /// Five letters, but not a dictionary word
    NotInDictionary,
    /// The round has already been won or lost
    RoundOver,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "Not enough letters"),
            Self::NotInDictionary => write!(f, "Not in word list"),
            Self::RoundOver => write!(f, "The round is over"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_messages() {
        assert_eq!(
            ConfigurationError::Empty.to_string(),
            "dictionary contains no words"
        );

        let err = ConfigurationError::InvalidWord {
            word: "toolong".to_string(),
            source: WordError::InvalidLength(7),
        };
        assert_eq!(
            err.to_string(),
            "dictionary entry \"toolong\" is not a valid 5-letter word"
        );
    }

    #[test]
    fn reject_reason_messages() {
        assert_eq!(RejectReason::TooShort.to_string(), "Not enough letters");
        assert_eq!(RejectReason::NotInDictionary.to_string(), "Not in word list");
    }
}
