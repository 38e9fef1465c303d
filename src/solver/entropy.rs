//! Expected-information scoring of guesses against the candidate
//! universe.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::core::{Guess, ResultKind, WORD_LEN, Word};
use crate::solver::universe::CandidateUniverse;
use crate::wordlists::WeightTable;

/// Expected information (in bits) gained by playing `guess`: candidates
/// are bucketed by the feedback pattern they would produce, and the
/// entropy of the resulting weight distribution is the answer.
#[must_use]
pub fn expected_information(guess: &Word, universe: &CandidateUniverse) -> f64 {
    let mut buckets: FxHashMap<[ResultKind; WORD_LEN], f64> = FxHashMap::default();
    for (candidate, weight) in universe.iter() {
        let pattern = Guess::calculate(guess, candidate).pattern();
        *buckets.entry(pattern).or_insert(0.0) += weight;
    }

    let total: f64 = buckets.values().sum();
    if total <= 0.0 {
        return 0.0;
    }
    buckets
        .values()
        .map(|mass| {
            let p = mass / total;
            if p > 0.0 { -p * p.log2() } else { 0.0 }
        })
        .sum()
}

/// The guess from `pool` with the highest expected information, scored
/// in parallel. Ties break toward the higher prior weight, then the
/// lexicographically later word, so selection is deterministic.
#[must_use]
pub fn select_most_informative<'a>(
    pool: &'a [Word],
    universe: &CandidateUniverse,
    weights: &WeightTable,
) -> Option<(&'a Word, f64)> {
    pool.par_iter()
        .map(|word| (word, expected_information(word, universe)))
        .max_by(|(a, ea), (b, eb)| {
            ea.total_cmp(eb)
                .then_with(|| weights.weight(a.text()).total_cmp(&weights.weight(b.text())))
                .then_with(|| a.text().cmp(b.text()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn distinct_patterns_give_full_entropy() {
        // "cigar" splits {crate, irate, grate} into three singleton
        // buckets via its leading letter, so it yields log2(3) bits.
        let universe =
            CandidateUniverse::new(&words(&["crate", "irate", "grate"]), &WeightTable::default());
        let bits = expected_information(&Word::new("cigar").unwrap(), &universe);
        assert!((bits - 3.0_f64.log2()).abs() < 1e-9, "{bits}");
    }

    #[test]
    fn uninformative_guess_has_zero_entropy() {
        let universe =
            CandidateUniverse::new(&words(&["crate", "irate", "grate"]), &WeightTable::default());
        let bits = expected_information(&Word::new("zzzzz").unwrap(), &universe);
        assert!(bits.abs() < 1e-9, "{bits}");
    }

    #[test]
    fn entropy_uses_candidate_weights() {
        // Weights 2:1:1 normalize to 0.5/0.25/0.25, whose entropy is
        // 1.5 bits when each candidate lands in its own bucket.
        let table = WeightTable::from_entries([
            ("aaaaa".to_owned(), 2.0),
            ("bbbbb".to_owned(), 1.0),
            ("ccccc".to_owned(), 1.0),
        ])
        .unwrap();
        let universe = CandidateUniverse::new(&words(&["aaaaa", "bbbbb", "ccccc"]), &table);
        let bits = expected_information(&Word::new("abcde").unwrap(), &universe);
        assert!((bits - 1.5).abs() < 1e-9, "{bits}");
    }

    #[test]
    fn selection_picks_the_splitting_guess() {
        let pool = words(&["cigar", "zzzzz"]);
        let universe =
            CandidateUniverse::new(&words(&["crate", "irate", "grate"]), &WeightTable::default());
        let (best, bits) =
            select_most_informative(&pool, &universe, &WeightTable::default()).unwrap();
        assert_eq!(best.text(), "cigar");
        assert!(bits > 1.0);
    }

    #[test]
    fn selection_of_empty_pool_is_none() {
        let universe = CandidateUniverse::new(&words(&["crate"]), &WeightTable::default());
        assert!(select_most_informative(&[], &universe, &WeightTable::default()).is_none());
    }
}
