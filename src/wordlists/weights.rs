//! Prior weights over words, used to bias answer sampling, candidate
//! elimination order, and tie-breaking.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use rustc_hash::FxHashMap;

use crate::core::Word;

/// A word-to-weight map. Words absent from the table weigh 1.0, so an
/// empty table is a uniform prior.
#[derive(Debug, Default, Clone)]
pub struct WeightTable {
    weights: FxHashMap<String, f64>,
}

impl WeightTable {
    /// Build from explicit entries.
    ///
    /// # Errors
    /// Fails on weights that are not finite and positive.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, f64)>) -> Result<Self> {
        let mut weights = FxHashMap::default();
        for (word, weight) in entries {
            ensure!(
                weight.is_finite() && weight > 0.0,
                "weight for {word:?} must be finite and positive, got {weight}"
            );
            weights.insert(word, weight);
        }
        Ok(Self { weights })
    }

    /// Load a weight table from a JSON object mapping word to weight.
    ///
    /// # Errors
    /// Propagates read failures, malformed JSON, and invalid weights.
    pub fn load_json(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading weight table {}", path.display()))?;
        let entries: HashMap<String, f64> = serde_json::from_str(&text)
            .with_context(|| format!("parsing weight table {}", path.display()))?;
        Self::from_entries(entries)
            .with_context(|| format!("validating weight table {}", path.display()))
    }

    /// Derive a prior from letter frequencies: each word weighs the mean
    /// relative frequency of its distinct letters, so common-letter words
    /// are sampled and kept preferentially.
    #[must_use]
    pub fn letter_frequency(words: &[Word]) -> Self {
        let mut counts = [0u64; 26];
        for word in words {
            for &b in word.chars() {
                counts[usize::from(b - b'a')] += 1;
            }
        }
        let total: u64 = counts.iter().sum();
        if total == 0 {
            return Self::default();
        }

        let mut weights = FxHashMap::default();
        for word in words {
            let mut seen = [false; 26];
            let mut sum = 0.0;
            let mut distinct = 0u32;
            for &b in word.chars() {
                let i = usize::from(b - b'a');
                if !seen[i] {
                    seen[i] = true;
                    sum += counts[i] as f64 / total as f64;
                    distinct += 1;
                }
            }
            weights.insert(word.text().to_owned(), sum / f64::from(distinct));
        }
        Self { weights }
    }

    /// The weight of a word, defaulting to 1.0 for unlisted words.
    #[must_use]
    pub fn weight(&self, text: &str) -> f64 {
        self.weights.get(text).copied().unwrap_or(1.0)
    }
}
