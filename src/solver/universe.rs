//! The weighted set of words still consistent with all feedback.

use std::fmt;

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::core::Word;
use crate::solver::hints::HintSet;
use crate::wordlists::WeightTable;

/// Narrowing removed every candidate, which only happens when the
/// feedback came from outside the dictionary or was reported wrongly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCandidateUniverse;

impl fmt::Display for EmptyCandidateUniverse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no candidate words remain consistent with the feedback")
    }
}

impl std::error::Error for EmptyCandidateUniverse {}

/// Candidate words with normalized prior weights.
///
/// Weights always sum to 1 (within float error); each narrowing filters
/// and renormalizes, so relative preferences survive elimination.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateUniverse {
    entries: Vec<(Word, f64)>,
}

impl CandidateUniverse {
    /// Build a universe over `words` with priors from `weights`.
    #[must_use]
    pub fn new(words: &[Word], weights: &WeightTable) -> Self {
        let entries = words
            .iter()
            .map(|w| (w.clone(), weights.weight(w.text())))
            .collect();
        Self { entries }.normalized()
    }

    fn normalized(mut self) -> Self {
        let total: f64 = self.entries.iter().map(|(_, w)| w).sum();
        if total > 0.0 {
            for (_, weight) in &mut self.entries {
                *weight /= total;
            }
        }
        self
    }

    /// A new universe with the last guess removed, every word the hints
    /// eliminate filtered out, and weights renormalized.
    ///
    /// # Errors
    /// Returns [`EmptyCandidateUniverse`] when nothing survives.
    pub fn narrowed(
        &self,
        last_guess: &Word,
        hints: &HintSet,
    ) -> Result<Self, EmptyCandidateUniverse> {
        let entries: Vec<(Word, f64)> = self
            .entries
            .iter()
            .filter(|(word, _)| word.text() != last_guess.text() && !hints.eliminates(word))
            .cloned()
            .collect();
        if entries.is_empty() {
            return Err(EmptyCandidateUniverse);
        }
        Ok(Self { entries }.normalized())
    }

    /// Draw a candidate with probability proportional to its weight.
    /// Falls back to a uniform draw if the weights degenerate.
    #[must_use]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        let weights: Vec<f64> = self.entries.iter().map(|(_, w)| *w).collect();
        match WeightedIndex::new(&weights) {
            Ok(dist) => &self.entries[dist.sample(rng)].0,
            Err(_) => &self.entries[rng.random_range(0..self.entries.len())].0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.entries.iter().any(|(w, _)| w.text() == text)
    }

    /// Candidates and their normalized weights.
    pub fn iter(&self) -> impl Iterator<Item = (&Word, f64)> {
        self.entries.iter().map(|(w, weight)| (w, *weight))
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.entries.iter().map(|(w, _)| w)
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }
}
