//! Accumulated knowledge from feedback, and the elimination rules it
//! implies.

use rustc_hash::FxHashSet;

use crate::core::{Guess, ResultKind, Word};

/// Everything the feedback so far has revealed about the answer.
///
/// Letters move between sets as evidence accumulates: a letter scored
/// `Wrong` in one guess may later prove present (duplicate letters), in
/// which case it is removed from the excluded set.
#[derive(Debug, Default, Clone)]
pub struct HintSet {
    /// Letters known to appear in the answer.
    included: FxHashSet<u8>,
    /// Letters known to be absent.
    excluded: FxHashSet<u8>,
    /// Letters pinned to a position.
    correct_position: FxHashSet<(u8, usize)>,
    /// Letter-position pairs ruled out by non-exact feedback.
    tried_wrong_position: FxHashSet<(u8, usize)>,
}

impl HintSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess's feedback into the accumulated hints.
    pub fn update(&mut self, guess: &Guess) {
        for (position, token) in guess.tokens().iter().enumerate() {
            let letter = token.letter;
            match token.kind {
                ResultKind::ExactMatch => {
                    self.included.insert(letter);
                    self.excluded.remove(&letter);
                    self.correct_position.insert((letter, position));
                }
                ResultKind::PresentWrongPosition => {
                    self.included.insert(letter);
                    self.excluded.remove(&letter);
                    self.tried_wrong_position.insert((letter, position));
                }
                ResultKind::Wrong => {
                    // A duplicate may score Wrong while another copy of
                    // the same letter scores elsewhere in this guess.
                    if !self.included.contains(&letter) {
                        self.excluded.insert(letter);
                    }
                    self.tried_wrong_position.insert((letter, position));
                }
            }
        }
    }

    /// Whether the accumulated hints rule `word` out as the answer.
    #[must_use]
    pub fn eliminates(&self, word: &Word) -> bool {
        let chars = word.chars();

        if self.included.iter().any(|l| !word.has_letter(*l)) {
            return true;
        }
        if chars.iter().any(|l| self.excluded.contains(l)) {
            return true;
        }
        if self
            .correct_position
            .iter()
            .any(|&(letter, position)| chars[position] != letter)
        {
            return true;
        }
        chars
            .iter()
            .enumerate()
            .any(|(position, &letter)| self.tried_wrong_position.contains(&(letter, position)))
    }

    /// Letters known to appear in the answer.
    #[must_use]
    pub const fn included(&self) -> &FxHashSet<u8> {
        &self.included
    }
}
