//! Process-wide immutable configuration.
//!
//! Dictionaries and prior weights are loaded once at startup and shared by
//! reference with every session; nothing here mutates after construction.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::core::Word;
use crate::wordlists::{self, WeightTable};

/// Load-once, read-only configuration shared by all sessions: the allowed
/// guess list (sorted for lookup), the possible-answers list, and the
/// prior-weight table.
pub struct GameConfig {
    allowed: Vec<Word>,
    answers: Vec<Word>,
    weights: WeightTable,
}

impl GameConfig {
    /// Build a config from already-parsed word lists.
    ///
    /// # Errors
    /// Fails when either list is empty or an answer is missing from the
    /// allowed list (such a puzzle could never be won).
    pub fn new(mut allowed: Vec<Word>, answers: Vec<Word>, weights: WeightTable) -> Result<Self> {
        ensure!(!allowed.is_empty(), "allowed word list is empty");
        ensure!(!answers.is_empty(), "possible-answers list is empty");

        allowed.sort_by(|a, b| a.text().cmp(b.text()));
        allowed.dedup_by(|a, b| a.text() == b.text());

        for answer in &answers {
            ensure!(
                allowed
                    .binary_search_by(|w| w.text().cmp(answer.text()))
                    .is_ok(),
                "answer {:?} is missing from the allowed list",
                answer.text()
            );
        }

        Ok(Self {
            allowed,
            answers,
            weights,
        })
    }

    /// Load a config from optional file paths, falling back to the
    /// embedded word lists and a letter-frequency prior.
    ///
    /// # Errors
    /// Propagates unreadable or malformed list and weight files.
    pub fn load(
        words: Option<&Path>,
        answers: Option<&Path>,
        weights: Option<&Path>,
    ) -> Result<Self> {
        let allowed = match words {
            Some(path) => wordlists::load_from_file(path)?,
            None => wordlists::embedded_allowed().context("embedded allowed list")?,
        };
        let answers = match answers {
            Some(path) => wordlists::load_from_file(path)?,
            None => wordlists::embedded_answers().context("embedded answers list")?,
        };
        let weights = match weights {
            Some(path) => WeightTable::load_json(path)?,
            None => WeightTable::letter_frequency(&allowed),
        };
        Self::new(allowed, answers, weights)
    }

    /// All guessable words, sorted by text.
    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    /// Words the secret answer may be drawn from.
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub const fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Find a word on the allowed list.
    #[must_use]
    pub fn lookup(&self, text: &str) -> Option<&Word> {
        self.allowed
            .binary_search_by(|w| w.text().cmp(text))
            .ok()
            .map(|i| &self.allowed[i])
    }

    #[must_use]
    pub fn is_allowed(&self, text: &str) -> bool {
        self.lookup(text).is_some()
    }

    /// Draw a secret answer, biased by prior weight. Falls back to a
    /// uniform draw if the weights cannot form a distribution.
    pub fn sample_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        let weights: Vec<f64> = self
            .answers
            .iter()
            .map(|w| self.weights.weight(w.text()))
            .collect();
        match WeightedIndex::new(&weights) {
            Ok(dist) => self.answers[dist.sample(rng)].clone(),
            Err(_) => self.answers[rng.random_range(0..self.answers.len())].clone(),
        }
    }

    /// Test fixture: uniform weights, panics on invalid input.
    #[cfg(test)]
    pub(crate) fn from_texts(allowed: &[&str], answers: &[&str]) -> Self {
        let to_words = |texts: &[&str]| {
            texts
                .iter()
                .map(|t| Word::new(*t).unwrap())
                .collect::<Vec<_>>()
        };
        Self::new(to_words(allowed), to_words(answers), WeightTable::default()).unwrap()
    }
}
