//! Guess-selection strategies.
//!
//! A strategy sees the current candidate universe plus game progress and
//! picks the next word to play. The default strategy plays weighted
//! random draws until the score is high enough that discriminating
//! between near-anagrams beats guessing among them.

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rustc_hash::FxHashSet;

use crate::core::Word;
use crate::game::MAX_GUESSES;
use crate::solver::entropy;
use crate::solver::universe::CandidateUniverse;
use crate::wordlists::WeightTable;

/// Score at which candidates are similar enough that probing their
/// differing letters is worth spending a turn.
pub const SCORE_THRESHOLD: u16 = 60;

/// Everything a strategy may consult when choosing the next guess.
pub struct SelectionContext<'a> {
    pub universe: &'a CandidateUniverse,
    /// The full guessable dictionary, not just remaining candidates.
    pub guess_pool: &'a [Word],
    pub weights: &'a WeightTable,
    pub guesses_used: usize,
    pub last_score: u16,
}

/// Picks the next guess. `None` means the strategy found nothing to
/// play, which the caller treats as a solver failure.
pub trait Strategy {
    fn select_guess<R: Rng + ?Sized>(
        &self,
        ctx: &SelectionContext<'_>,
        rng: &mut R,
    ) -> Option<Word>;
}

/// Samples candidates in proportion to prior weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedRandomStrategy;

impl Strategy for WeightedRandomStrategy {
    fn select_guess<R: Rng + ?Sized>(
        &self,
        ctx: &SelectionContext<'_>,
        rng: &mut R,
    ) -> Option<Word> {
        if ctx.universe.is_empty() {
            return None;
        }
        Some(ctx.universe.sample(rng).clone())
    }
}

/// Always plays the highest expected-information word from the full
/// guess pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyMaximizingStrategy;

impl Strategy for EntropyMaximizingStrategy {
    fn select_guess<R: Rng + ?Sized>(
        &self,
        ctx: &SelectionContext<'_>,
        _rng: &mut R,
    ) -> Option<Word> {
        entropy::select_most_informative(ctx.guess_pool, ctx.universe, ctx.weights)
            .map(|(word, _)| word.clone())
    }
}

/// Weighted random play with a late-game twist: once the score is high
/// and few turns remain, spend one turn on a word covering the letters
/// that still differ between candidates instead of guessing blind among
/// near-anagrams.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueLetterStrategy;

impl UniqueLetterStrategy {
    /// Whether the discriminating probe is worth a turn: the score says
    /// the candidates are close, a turn can be spared, and there are
    /// more candidates than turns left.
    #[must_use]
    pub fn fallback_active(ctx: &SelectionContext<'_>) -> bool {
        ctx.last_score >= SCORE_THRESHOLD
            && ctx.guesses_used < MAX_GUESSES - 1
            && MAX_GUESSES - ctx.guesses_used < ctx.universe.len()
    }

    /// Letters that appear in some candidates but not all, sorted.
    /// When every candidate is an anagram of the others the symmetric
    /// difference is empty, so the least-weighted candidates are dropped
    /// until a difference appears.
    fn differing_letters(ctx: &SelectionContext<'_>) -> Vec<u8> {
        let mut candidates: Vec<(&Word, f64)> = ctx.universe.iter().collect();
        candidates.sort_by(|(a, wa), (b, wb)| {
            wb.total_cmp(wa).then_with(|| a.text().cmp(b.text()))
        });

        loop {
            let mut letters: FxHashSet<u8> = FxHashSet::default();
            for (word, _) in &candidates {
                let set: FxHashSet<u8> = word.chars().iter().copied().collect();
                letters = letters.symmetric_difference(&set).copied().collect();
            }
            if !letters.is_empty() || candidates.len() <= 1 {
                let mut sorted: Vec<u8> = letters.into_iter().collect();
                sorted.sort_unstable();
                return sorted;
            }
            candidates.pop();
        }
    }

    /// Dictionary words covering all of `letters`, relaxing the
    /// requirement a letter at a time until something qualifies.
    fn coverage_pool<'a>(pool: &'a [Word], mut letters: Vec<u8>) -> Vec<&'a Word> {
        while !letters.is_empty() {
            let covering: Vec<&Word> = pool
                .iter()
                .filter(|word| letters.iter().all(|l| word.has_letter(*l)))
                .collect();
            if !covering.is_empty() {
                return covering;
            }
            letters.pop();
        }
        Vec::new()
    }

    fn sample_by_weight<'a, R: Rng + ?Sized>(
        words: &[&'a Word],
        weights: &WeightTable,
        rng: &mut R,
    ) -> Option<&'a Word> {
        if words.is_empty() {
            return None;
        }
        let priors: Vec<f64> = words.iter().map(|w| weights.weight(w.text())).collect();
        match WeightedIndex::new(&priors) {
            Ok(dist) => Some(words[dist.sample(rng)]),
            Err(_) => Some(words[rng.random_range(0..words.len())]),
        }
    }
}

impl Strategy for UniqueLetterStrategy {
    fn select_guess<R: Rng + ?Sized>(
        &self,
        ctx: &SelectionContext<'_>,
        rng: &mut R,
    ) -> Option<Word> {
        if ctx.universe.is_empty() {
            return None;
        }
        if Self::fallback_active(ctx) {
            let letters = Self::differing_letters(ctx);
            let covering = Self::coverage_pool(ctx.guess_pool, letters);
            if let Some(probe) = Self::sample_by_weight(&covering, ctx.weights, rng) {
                return Some(probe.clone());
            }
        }
        Some(ctx.universe.sample(rng).clone())
    }
}

/// Strategy selection for the CLI and benchmark harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    WeightedRandom,
    UniqueLetterPriority,
    Entropy,
}

impl StrategyType {
    /// Parse a strategy name, defaulting unknown names to the
    /// unique-letter strategy.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "weighted" => Self::WeightedRandom,
            "entropy" => Self::Entropy,
            _ => Self::UniqueLetterPriority,
        }
    }

    pub fn select_guess<R: Rng + ?Sized>(
        self,
        ctx: &SelectionContext<'_>,
        rng: &mut R,
    ) -> Option<Word> {
        match self {
            Self::WeightedRandom => WeightedRandomStrategy.select_guess(ctx, rng),
            Self::UniqueLetterPriority => UniqueLetterStrategy.select_guess(ctx, rng),
            Self::Entropy => EntropyMaximizingStrategy.select_guess(ctx, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn context<'a>(
        universe: &'a CandidateUniverse,
        pool: &'a [Word],
        weights: &'a WeightTable,
        guesses_used: usize,
        last_score: u16,
    ) -> SelectionContext<'a> {
        SelectionContext {
            universe,
            guess_pool: pool,
            weights,
            guesses_used,
            last_score,
        }
    }

    #[test]
    fn strategy_names_resolve() {
        assert_eq!(StrategyType::from_name("weighted"), StrategyType::WeightedRandom);
        assert_eq!(StrategyType::from_name("Entropy"), StrategyType::Entropy);
        assert_eq!(StrategyType::from_name("unique"), StrategyType::UniqueLetterPriority);
        assert_eq!(StrategyType::from_name("anything"), StrategyType::UniqueLetterPriority);
    }

    #[test]
    fn fallback_predicate_edges() {
        let pool = words(&["crate", "irate", "grate", "slate", "plate", "elate", "gruel"]);
        let weights = WeightTable::default();
        let universe = CandidateUniverse::new(&pool, &weights);

        // Active: high score, turns to spare, more candidates than turns.
        assert!(UniqueLetterStrategy::fallback_active(&context(
            &universe, &pool, &weights, 2, 60
        )));
        // Below the score threshold.
        assert!(!UniqueLetterStrategy::fallback_active(&context(
            &universe, &pool, &weights, 2, 50
        )));
        // Second-to-last turn cannot be spared.
        assert!(!UniqueLetterStrategy::fallback_active(&context(
            &universe, &pool, &weights, 5, 80
        )));
        // Fewer candidates than turns left: just play them out.
        let tiny = CandidateUniverse::new(&words(&["crate", "irate"]), &weights);
        assert!(!UniqueLetterStrategy::fallback_active(&context(
            &tiny, &pool, &weights, 2, 80
        )));
    }

    #[test]
    fn weighted_random_draws_from_universe() {
        let pool = words(&["crate", "irate", "grate"]);
        let weights = WeightTable::default();
        let universe = CandidateUniverse::new(&pool, &weights);
        let mut rng = StdRng::seed_from_u64(3);
        let pick = WeightedRandomStrategy
            .select_guess(&context(&universe, &pool, &weights, 0, 0), &mut rng)
            .unwrap();
        assert!(universe.contains(pick.text()));
    }

    #[test]
    fn entropy_strategy_picks_the_splitter() {
        let pool = words(&["cigar", "zzzzz", "crate", "irate", "grate"]);
        let weights = WeightTable::default();
        let universe = CandidateUniverse::new(&words(&["crate", "irate", "grate"]), &weights);
        let mut rng = StdRng::seed_from_u64(3);
        let pick = EntropyMaximizingStrategy
            .select_guess(&context(&universe, &pool, &weights, 1, 60), &mut rng)
            .unwrap();
        assert_eq!(pick.text(), "cigar");
    }

    #[test]
    fn probe_covers_differing_letters() {
        // crate/irate/grate/slate differ in their leading consonants;
        // after coverage relaxation the probe must still hit c, g, i,
        // which only "cigar" and "magic" in this pool do.
        let pool = words(&[
            "crate", "irate", "grate", "slate", "cigar", "magic", "pivot", "robot", "sound",
            "lymph", "quack", "there", "those", "other",
        ]);
        let weights = WeightTable::default();
        let universe =
            CandidateUniverse::new(&words(&["crate", "irate", "grate", "slate"]), &weights);
        let ctx = context(&universe, &pool, &weights, 4, 80);
        assert!(UniqueLetterStrategy::fallback_active(&ctx));

        let mut rng = StdRng::seed_from_u64(5);
        let pick = UniqueLetterStrategy.select_guess(&ctx, &mut rng).unwrap();
        for letter in [b'c', b'g', b'i'] {
            assert!(pick.has_letter(letter), "probe {pick} misses {}", letter as char);
        }
    }

    #[test]
    fn anagram_universe_still_finds_letters() {
        // Four mutual anagrams of {a, c, e, r, t}: their symmetric
        // difference is empty until one candidate is dropped, after
        // which the shared letters surface.
        let pool = words(&["trace", "crate", "cater", "react"]);
        let weights = WeightTable::default();
        let universe = CandidateUniverse::new(&pool, &weights);
        let ctx = context(&universe, &pool, &weights, 2, 80);
        let letters = UniqueLetterStrategy::differing_letters(&ctx);
        assert_eq!(letters, vec![b'a', b'c', b'e', b'r', b't']);
    }

    #[test]
    fn selection_is_deterministic_for_a_seed() {
        let pool = words(&["crate", "irate", "grate", "slate", "plate"]);
        let weights = WeightTable::default();
        let universe = CandidateUniverse::new(&pool, &weights);
        let pick = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            UniqueLetterStrategy
                .select_guess(&context(&universe, &pool, &weights, 0, 0), &mut rng)
                .unwrap()
        };
        assert_eq!(pick(42).text(), pick(42).text());
    }
}
