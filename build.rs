//! Build script that embeds the game dictionary
//!
//! Turns `data/words.txt` (one lowercase five-letter word per line) into the
//! `WORDS` and `WORDS_COUNT` consts used as the default answer pool and
//! guess dictionary. A malformed entry fails the build instead of the game.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const DICTIONARY: &str = "data/words.txt";
const WORD_LENGTH: usize = 5;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let content = fs::read_to_string(DICTIONARY)
        .unwrap_or_else(|e| panic!("Failed to read {DICTIONARY}: {e}"));

    let words = dictionary_words(&content);
    let dest = Path::new(&out_dir).join("words.rs");
    fs::write(&dest, render(&words))
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", dest.display()));

    println!("cargo:rerun-if-changed={DICTIONARY}");
}

/// Non-blank lines, each checked to be a playable word
fn dictionary_words(content: &str) -> Vec<&str> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, word)| !word.is_empty())
        .map(|(line_no, word)| {
            assert!(
                word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase()),
                "{DICTIONARY}:{line_no}: '{word}' is not a lowercase {WORD_LENGTH}-letter word"
            );
            word
        })
        .collect()
}

fn render(words: &[&str]) -> String {
    let mut out = String::from("// Generated from data/words.txt\n\n");
    out.push_str("/// Default dictionary of five-letter words\n");
    out.push_str("pub const WORDS: &[&str] = &[\n");
    for word in words {
        writeln!(out, "    \"{word}\",").unwrap();
    }
    out.push_str("];\n\n/// Number of words in `WORDS`\n");
    writeln!(out, "pub const WORDS_COUNT: usize = {};", words.len()).unwrap();
    out
}
