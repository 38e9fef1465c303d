//! Append-only record of the guesses made in one session.

use super::MAX_GUESSES;
use crate::core::Guess;

/// The ordered guesses of one session, at most [`MAX_GUESSES`] of them.
#[derive(Debug, Clone, Default)]
pub struct Board {
    guesses: Vec<Guess>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self {
            guesses: Vec::with_capacity(MAX_GUESSES),
        }
    }

    /// Append a scored guess. The session enforces the turn limit before
    /// calling this.
    pub(crate) fn push(&mut self, guess: Guess) {
        debug_assert!(self.guesses.len() < MAX_GUESSES);
        self.guesses.push(guess);
    }

    /// Guesses made so far.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    /// Most recent guess, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Guess> {
        self.guesses.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Guess> {
        self.guesses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn guess(text: &str) -> Guess {
        let word = Word::new(text).unwrap();
        Guess::calculate(&word, &word)
    }

    #[test]
    fn board_starts_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.len(), 0);
        assert!(board.last().is_none());
    }

    #[test]
    fn push_appends_in_order() {
        let mut board = Board::new();
        board.push(guess("crane"));
        board.push(guess("slate"));

        assert_eq!(board.len(), 2);
        assert_eq!(board.last().unwrap().word().text(), "slate");

        let words: Vec<&str> = board.iter().map(|g| g.word().text()).collect();
        assert_eq!(words, ["crane", "slate"]);
    }
}
