//! Parsing and file loading for plain-text word lists.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail, ensure};

use crate::core::Word;

/// Parse one word per line. Blank lines are skipped; any other invalid
/// line aborts the whole load so a corrupt list cannot silently shrink
/// the dictionary.
///
/// # Errors
/// Fails on the first malformed line (reported with its line number) or
/// when no words remain.
pub fn parse_word_list(text: &str) -> Result<Vec<Word>> {
    let mut words = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match Word::new(line) {
            Ok(word) => words.push(word),
            Err(err) => bail!("line {}: {:?}: {}", index + 1, line, err),
        }
    }
    ensure!(!words.is_empty(), "word list contains no words");
    Ok(words)
}

/// Load and parse a word-list file.
///
/// # Errors
/// Propagates read failures and malformed content, naming the file.
pub fn load_from_file(path: &Path) -> Result<Vec<Word>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading word list {}", path.display()))?;
    parse_word_list(&text).with_context(|| format!("parsing word list {}", path.display()))
}
