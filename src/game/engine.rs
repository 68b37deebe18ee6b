//! Round state and guess evaluation
//!
//! The engine owns everything a round needs: the hidden answer, the letters
//! typed so far and the scored history. It knows nothing about how it is
//! displayed; front ends call the mutating methods and then re-read state.

use super::{ConfigurationError, Dictionary, RejectReason};
use crate::core::{Feedback, KeyStatuses, MAX_GUESSES, WORD_LENGTH, Word};
use rand::Rng;

/// One accepted guess and its hints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub word: Word,
    pub feedback: Feedback,
}

/// Result of submitting the current buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { feedback: Feedback, is_win: bool },
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// A single round of Wordle
#[derive(Debug)]
pub struct GuessEngine<'a> {
    dictionary: &'a Dictionary,
    answer: Word,
    buffer: String,
    history: Vec<HistoryEntry>,
}

impl<'a> GuessEngine<'a> {
    /// Start a round with an answer drawn from the thread-local RNG
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_rng(dictionary, &mut rand::rng())
    }

    /// Start a round with an answer drawn from `rng`
    pub fn with_rng<R: Rng + ?Sized>(dictionary: &'a Dictionary, rng: &mut R) -> Self {
        let answer = dictionary.choose(rng).clone();
        log::debug!("new round over {} words", dictionary.len());
        log::trace!("answer is {answer}");
        Self::start(dictionary, answer)
    }

    /// Start a round with a fixed answer
    ///
    /// # Errors
    /// Returns `ConfigurationError::AnswerNotInDictionary` if `answer` is not
    /// a dictionary word.
    pub fn with_answer(
        dictionary: &'a Dictionary,
        answer: &str,
    ) -> Result<Self, ConfigurationError> {
        let word = Word::new(answer)
            .ok()
            .filter(|word| dictionary.contains(word))
            .ok_or_else(|| ConfigurationError::AnswerNotInDictionary(answer.to_string()))?;
        Ok(Self::start(dictionary, word))
    }

    fn start(dictionary: &'a Dictionary, answer: Word) -> Self {
        Self {
            dictionary,
            answer,
            buffer: String::with_capacity(WORD_LENGTH),
            history: Vec::with_capacity(MAX_GUESSES),
        }
    }

    /// Type a letter into the buffer
    ///
    /// Ignored for non-letters, a full buffer, or a finished round.
    pub fn append_letter(&mut self, letter: char) {
        if !letter.is_ascii_alphabetic() || self.buffer.len() == WORD_LENGTH || self.is_over() {
            return;
        }
        self.buffer.push(letter.to_ascii_uppercase());
    }

    /// Delete the last typed letter
    ///
    /// Ignored for an empty buffer or a finished round.
    pub fn remove_last_letter(&mut self) {
        if self.is_over() {
            return;
        }
        self.buffer.pop();
    }

    /// Score the buffer against the answer and record it
    ///
    /// On rejection nothing changes. On acceptance the guess is appended to
    /// the history and the buffer is cleared.
    pub fn submit_guess(&mut self) -> SubmitOutcome {
        let guess = match self.validate_buffer() {
            Ok(guess) => guess,
            Err(reason) => {
                log::debug!("rejected {:?}: {reason}", self.buffer);
                return SubmitOutcome::Rejected(reason);
            }
        };

        let feedback = Feedback::calculate(&guess, &self.answer);
        let is_win = feedback.is_win();

        self.history.push(HistoryEntry {
            word: guess,
            feedback,
        });
        self.buffer.clear();

        match self.status() {
            RoundStatus::Won => log::info!("round won in {}/{MAX_GUESSES}", self.history.len()),
            RoundStatus::Lost => log::info!("round lost, answer was {}", self.answer),
            RoundStatus::InProgress => {}
        }

        SubmitOutcome::Accepted { feedback, is_win }
    }

    fn validate_buffer(&self) -> Result<Word, RejectReason> {
        if self.is_over() {
            return Err(RejectReason::RoundOver);
        }
        if self.buffer.len() != WORD_LENGTH {
            return Err(RejectReason::TooShort);
        }
        Word::new(&self.buffer)
            .ok()
            .filter(|word| self.dictionary.contains(word))
            .ok_or(RejectReason::NotInDictionary)
    }

    /// Letters typed for the guess in progress, uppercase
    #[must_use]
    pub fn current_buffer(&self) -> &str {
        &self.buffer
    }

    /// Accepted guesses in submission order
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES - self.history.len()
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.history.last().is_some_and(|entry| entry.feedback.is_win()) {
            RoundStatus::Won
        } else if self.history.len() == MAX_GUESSES {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status() != RoundStatus::InProgress
    }

    /// The hidden word, for revealing once the round is lost
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// Dictionary shared with later rounds
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Best hint per letter over the whole history
    #[must_use]
    pub fn key_statuses(&self) -> KeyStatuses {
        KeyStatuses::from_guesses(
            self.history
                .iter()
                .map(|entry| (&entry.word, &entry.feedback)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Hint;

    fn dictionary() -> Dictionary {
        Dictionary::new(["speed", "erase", "crane", "slate", "trace", "crate", "robot"]).unwrap()
    }

    fn type_word(engine: &mut GuessEngine, word: &str) {
        for letter in word.chars() {
            engine.append_letter(letter);
        }
    }

    #[test]
    fn new_round_is_empty() {
        let dictionary = dictionary();
        let engine = GuessEngine::new(&dictionary);

        assert_eq!(engine.current_buffer(), "");
        assert!(engine.history().is_empty());
        assert_eq!(engine.remaining_guesses(), MAX_GUESSES);
        assert_eq!(engine.status(), RoundStatus::InProgress);
        assert!(dictionary.contains(engine.answer()));
    }

    #[test]
    fn with_answer_requires_dictionary_word() {
        let dictionary = dictionary();
        assert!(GuessEngine::with_answer(&dictionary, "speed").is_ok());
        assert_eq!(
            GuessEngine::with_answer(&dictionary, "zebra").err(),
            Some(ConfigurationError::AnswerNotInDictionary("zebra".to_string()))
        );
        assert!(GuessEngine::with_answer(&dictionary, "abc").is_err());
    }

    #[test]
    fn append_uppercases_and_ignores_non_letters() {
        let dictionary = dictionary();
        let mut engine = GuessEngine::with_answer(&dictionary, "speed").unwrap();

        engine.append_letter('s');
        engine.append_letter('1');
        engine.append_letter('!');
        engine.append_letter(' ');
        engine.append_letter('é');
        engine.append_letter('P');

        assert_eq!(engine.current_buffer(), "SP");
    }

    #[test]
    fn append_stops_at_word_length() {
        let dictionary = dictionary();
        let mut engine = GuessEngine::with_answer(&dictionary, "speed").unwrap();

        type_word(&mut engine, "cranes");
        assert_eq!(engine.current_buffer(), "CRANE");
    }

    #[test]
    fn remove_on_empty_buffer_is_noop() {
        let dictionary = dictionary();
        let mut engine = GuessEngine::with_answer(&dictionary, "speed").unwrap();

        engine.remove_last_letter();
        assert_eq!(engine.current_buffer(), "");

        type_word(&mut engine, "cr");
        engine.remove_last_letter();
        assert_eq!(engine.current_buffer(), "C");
    }

    #[test]
    fn too_short_is_rejected_and_buffer_kept() {
        let dictionary = dictionary();
        let mut engine = GuessEngine::with_answer(&dictionary, "speed").unwrap();

        type_word(&mut engine, "cra");
        assert_eq!(
            engine.submit_guess(),
            SubmitOutcome::Rejected(RejectReason::TooShort)
        );
        assert_eq!(engine.current_buffer(), "CRA");
        assert!(engine.history().is_empty());
    }

    #[test]
    fn unknown_word_is_rejected_and_state_kept() {
        let dictionary = dictionary();
        let mut engine = GuessEngine::with_answer(&dictionary, "speed").unwrap();

        type_word(&mut engine, "zzzzz");
        assert_eq!(
            engine.submit_guess(),
            SubmitOutcome::Rejected(RejectReason::NotInDictionary)
        );
        assert_eq!(engine.current_buffer(), "ZZZZZ");
        assert_eq!(engine.remaining_guesses(), MAX_GUESSES);
    }

    #[test]
    fn accepted_guess_is_recorded() {
        let dictionary = dictionary();
        let mut engine = GuessEngine::with_answer(&dictionary, "speed").unwrap();

        type_word(&mut engine, "erase");
        let outcome = engine.submit_guess();

        let SubmitOutcome::Accepted { feedback, is_win } = outcome else {
            panic!("expected acceptance, got {outcome:?}");
        };
        assert!(!is_win);
        assert_eq!(
            feedback.hints(),
            &[Hint::Present, Hint::Absent, Hint::Absent, Hint::Present, Hint::Present]
        );
        assert_eq!(engine.current_buffer(), "");
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.history()[0].word.as_str(), "ERASE");
        assert_eq!(engine.history()[0].feedback, feedback);
        assert_eq!(engine.remaining_guesses(), MAX_GUESSES - 1);
    }

    #[test]
    fn guessing_the_answer_wins() {
        let dictionary = dictionary();
        let mut engine = GuessEngine::with_answer(&dictionary, "crane").unwrap();

        type_word(&mut engine, "crane");
        assert_eq!(
            engine.submit_guess(),
            SubmitOutcome::Accepted {
                feedback: Feedback::WIN,
                is_win: true
            }
        );
        assert_eq!(engine.status(), RoundStatus::Won);
        assert!(engine.is_over());

        type_word(&mut engine, "slate");
        assert_eq!(engine.current_buffer(), "");
        assert_eq!(
            engine.submit_guess(),
            SubmitOutcome::Rejected(RejectReason::RoundOver)
        );
    }

    #[test]
    fn key_statuses_follow_history() {
        let dictionary = dictionary();
        let mut engine = GuessEngine::with_answer(&dictionary, "crate").unwrap();

        type_word(&mut engine, "trace");
        engine.submit_guess();

        let statuses = engine.key_statuses();
        assert_eq!(statuses.status('T'), Some(Hint::Present));
        assert_eq!(statuses.status('R'), Some(Hint::Correct));
        assert_eq!(statuses.status('S'), None);
    }
}
