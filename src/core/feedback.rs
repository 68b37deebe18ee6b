//! Per-letter hint calculation and representation
//!
//! Each position of a submitted guess gets one of three hints:
//! - Correct: letter is in the answer at this position
//! - Present: letter is in the answer, but elsewhere
//! - Absent: letter is not in the answer (or every occurrence is already used)

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter of a guess
///
/// Variants are ordered by priority, so `Correct > Present > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Hint {
    Absent,
    Present,
    Correct,
}

impl Hint {
    /// Emoji square used when sharing a board
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// The hint vector for one guess, one hint per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Hint; WORD_LENGTH]);

impl Feedback {
    /// All correct (the guess was the answer)
    pub const WIN: Self = Self([Hint::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(hints: [Hint; WORD_LENGTH]) -> Self {
        Self(hints)
    }

    /// Calculate the feedback when `guess` is scored against `answer`
    ///
    /// # Algorithm
    /// 1. Count every letter of the answer
    /// 2. First pass, left to right: mark exact position matches and use up
    ///    one count of that letter each
    /// 3. Second pass, left to right, skipping exact matches: mark a letter
    ///    present while its count is still positive, using one count each time
    ///
    /// Exact matches therefore always win the letter budget, and among
    /// misplaced duplicates the leftmost ones are marked first.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Hint, Word};
    ///
    /// let guess = Word::new("erase").unwrap();
    /// let answer = Word::new("speed").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// assert_eq!(feedback.hints()[0], Hint::Present);
    /// assert_eq!(feedback.hints()[1], Hint::Absent);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut hints = [Hint::Absent; WORD_LENGTH];
        let mut remaining = answer.letter_counts();

        // First pass: exact position matches
        for (i, hint) in hints.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if letter == answer.letter_at(i) {
                *hint = Hint::Correct;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters from what is left
        for (i, hint) in hints.iter_mut().enumerate() {
            if *hint == Hint::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                *hint = Hint::Present;
                *count -= 1;
            }
        }

        Self(hints)
    }

    #[inline]
    #[must_use]
    pub const fn hints(&self) -> &[Hint; WORD_LENGTH] {
        &self.0
    }

    /// Check if every hint is `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&hint| hint == Hint::Correct)
    }

    /// Convert to an emoji string like "🟩🟨⬛⬛🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|hint| hint.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Hint::{Absent, Correct, Present};

    fn feedback(guess: &str, answer: &str) -> [Hint; WORD_LENGTH] {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        *Feedback::calculate(&guess, &answer).hints()
    }

    #[test]
    fn all_absent() {
        assert_eq!(feedback("abcde", "fghij"), [Absent; WORD_LENGTH]);
    }

    #[test]
    fn all_correct() {
        let word = Word::new("crane").unwrap();
        let result = Feedback::calculate(&word, &word);
        assert_eq!(result, Feedback::WIN);
        assert!(result.is_win());
    }

    #[test]
    fn distinct_letters_match_position_rule() {
        // CRANE vs SLATE: A and E exact, nothing else shared
        assert_eq!(
            feedback("crane", "slate"),
            [Absent, Absent, Correct, Absent, Correct]
        );
        // TRACE vs CRATE: C and T swapped
        assert_eq!(
            feedback("trace", "crate"),
            [Present, Correct, Correct, Present, Correct]
        );
    }

    #[test]
    fn erase_against_speed() {
        // Answer SPEED holds S, P, E, E, D. No exact matches, so the E budget
        // of two goes to positions 0 and 4, and S is misplaced.
        assert_eq!(
            feedback("erase", "speed"),
            [Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn exact_match_consumes_budget_before_misplaced() {
        // CRANE has a single E at position 4; EERIE's final E takes it, so the
        // leading Es are absent even though they come first
        assert_eq!(
            feedback("eerie", "crane"),
            [Absent, Absent, Present, Absent, Correct]
        );
    }

    #[test]
    fn leftmost_duplicate_takes_single_occurrence() {
        // HOTEL has one L; only the first L of LLAMA is marked
        assert_eq!(
            feedback("llama", "hotel"),
            [Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn duplicate_in_both_words() {
        // ROBOT vs FLOOR: second O is exact, first O uses the other O
        assert_eq!(
            feedback("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn hint_priority_ordering() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert!(Some(Absent) > None);
    }

    #[test]
    fn emoji_rendering() {
        let result = Feedback::new([Correct, Present, Absent, Absent, Correct]);
        assert_eq!(result.to_emoji(), "🟩🟨⬛⬛🟩");
        assert_eq!(format!("{result}"), "🟩🟨⬛⬛🟩");
    }
}
