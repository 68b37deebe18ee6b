//! Word list loading utilities
//!
//! Builds a `Dictionary` from the embedded list or from a file on disk.

use super::WORDS;
use crate::game::{ConfigurationError, Dictionary};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to turn a word list file into a dictionary
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path} as a JSON array of words")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid word list {path}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ConfigurationError,
    },
}

/// Dictionary built from the compiled-in word list
///
/// # Errors
/// Returns `ConfigurationError` only if the embedded list is malformed.
pub fn embedded() -> Result<Dictionary, ConfigurationError> {
    Dictionary::new(WORDS)
}

/// Load a dictionary from a file
///
/// Files ending in `.json` are read as a JSON array of strings. Anything
/// else is read as one word per line, skipping blank lines.
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read, is not valid JSON when a
/// JSON file is expected, or contains no words or a malformed word.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let result = if is_json {
        let words: Vec<String> =
            serde_json::from_str(&content).map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Dictionary::new(words.iter().map(|word| word.trim()))
    } else {
        parse_lines(&content)
    };

    let dictionary = result.map_err(|source| LoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {} words from {}", dictionary.len(), path.display());
    Ok(dictionary)
}

/// Build a dictionary from newline-separated text
///
/// # Errors
/// Returns `ConfigurationError` if no words remain after skipping blank
/// lines, or if any line is not a valid word.
pub fn parse_lines(content: &str) -> Result<Dictionary, ConfigurationError> {
    Dictionary::new(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty()),
    )
}
