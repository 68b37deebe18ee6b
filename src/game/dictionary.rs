//! The set of words a round may use
//!
//! A dictionary is validated once when it is built and never changes after,
//! so a single instance can back any number of rounds.

use super::ConfigurationError;
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Immutable set of valid five-letter words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from source words
    ///
    /// Words may be in any case. Duplicates are dropped, keeping the first
    /// occurrence so the answer draw stays uniform over distinct words.
    ///
    /// # Errors
    /// Returns `ConfigurationError::Empty` if no words are given, or
    /// `ConfigurationError::InvalidWord` for the first entry that is not a
    /// five-letter alphabetic word.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["crane", "slate"]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains_str("SLATE"));
    ///
    /// assert!(Dictionary::new(["crane", "abc"]).is_err());
    /// ```
    pub fn new<I, S>(source: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut lookup = FxHashSet::default();

        for entry in source {
            let entry = entry.as_ref();
            let word = Word::new(entry).map_err(|source| ConfigurationError::InvalidWord {
                word: entry.to_string(),
                source,
            })?;
            if lookup.insert(word.clone()) {
                words.push(word);
            }
        }

        if words.is_empty() {
            return Err(ConfigurationError::Empty);
        }

        log::debug!("dictionary built with {} words", words.len());
        Ok(Self { words, lookup })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed dictionary
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// Case-insensitive membership test for raw text
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains(&word))
    }

    /// Words in source order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Draw one word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Construction guarantees at least one word
        self.words.choose(rng).unwrap_or(&self.words[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn builds_from_lowercase_source() {
        let dictionary = Dictionary::new(["crane", "slate", "speed"]).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert!(!dictionary.is_empty());
        assert_eq!(dictionary.words()[0].as_str(), "CRANE");
    }

    #[test]
    fn membership_is_case_insensitive() {
        let dictionary = Dictionary::new(["crane"]).unwrap();
        assert!(dictionary.contains_str("crane"));
        assert!(dictionary.contains_str("CRANE"));
        assert!(dictionary.contains_str("CrAnE"));
        assert!(!dictionary.contains_str("slate"));
        assert!(!dictionary.contains_str("cran"));
    }

    #[test]
    fn duplicates_are_harmless() {
        let dictionary = Dictionary::new(["crane", "CRANE", "slate", "crane"]).unwrap();
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn empty_source_is_rejected() {
        let source: [&str; 0] = [];
        assert_eq!(
            Dictionary::new(source).unwrap_err(),
            ConfigurationError::Empty
        );
    }

    #[test]
    fn wrong_length_entry_is_rejected() {
        let err = Dictionary::new(["crane", "cranes"]).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidWord { ref word, .. } if word == "cranes"
        ));
    }

    #[test]
    fn non_alphabetic_entry_is_rejected() {
        assert!(matches!(
            Dictionary::new(["cr4ne"]),
            Err(ConfigurationError::InvalidWord { .. })
        ));
    }

    #[test]
    fn choose_returns_dictionary_word() {
        let dictionary = Dictionary::new(["crane", "slate", "speed", "erase"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = dictionary.choose(&mut rng);
            assert!(dictionary.contains(word));
        }
    }

    #[test]
    fn choose_is_reproducible_with_seed() {
        let dictionary = Dictionary::new(["crane", "slate", "speed", "erase"]).unwrap();
        let first = dictionary.choose(&mut StdRng::seed_from_u64(42)).clone();
        let second = dictionary.choose(&mut StdRng::seed_from_u64(42)).clone();
        assert_eq!(first, second);
    }

    #[test]
    fn choose_reaches_every_word() {
        let dictionary = Dictionary::new(["crane", "slate", "speed"]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let seen: FxHashSet<Word> = (0..200)
            .map(|_| dictionary.choose(&mut rng).clone())
            .collect();
        assert_eq!(seen.len(), dictionary.len());
    }
}
