//! Validated five-letter words.

use std::fmt;

use super::WORD_LEN;

/// A lowercase five-letter word.
///
/// Construction normalizes case and rejects anything that is not exactly
/// five ASCII letters, so the rest of the crate can index letters as plain
/// bytes without re-checking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    WrongLength(usize),
    NotAsciiLetters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NotAsciiLetters => write!(f, "word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a validated word, lowercasing the input.
    ///
    /// # Errors
    /// Returns `WordError` if the input is not exactly five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_pilot::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert!(Word::new("cran3").is_err());
    /// assert!(Word::new("cranes").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NotAsciiLetters);
        }
        if text.len() != WORD_LEN {
            return Err(WordError::WrongLength(text.len()));
        }
        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::NotAsciiLetters);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::WrongLength(text.len()))?;

        Ok(Self { text, chars })
    }

    /// The word as a string slice.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The word as a byte array.
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Whether the word contains `letter` at any position.
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
