//! Benchmark command
//!
//! Measures solver performance over many games in parallel.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::config::GameConfig;
use crate::core::Word;
use crate::solver::{SolveError, SolverLoop, StrategyType};

/// Aggregated results of a benchmark run.
pub struct BenchmarkReport {
    pub games: usize,
    pub wins: usize,
    pub win_rate: f64,
    pub average_guesses: f64,
    /// Guess count to number of games won in that many guesses.
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
}

/// Run `games` solves in parallel. Answers and solver randomness derive
/// from `seed` plus the game index, so a run is reproducible.
///
/// # Errors
/// Propagates the first solver failure.
pub fn run_benchmark(
    config: &GameConfig,
    strategy: StrategyType,
    games: usize,
    first_word: Option<&Word>,
    seed: u64,
) -> Result<BenchmarkReport, SolveError> {
    let start = Instant::now();

    let outcomes = (0..games)
        .into_par_iter()
        .map(|index| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
            let answer = config.sample_answer(&mut rng);
            let mut solver = SolverLoop::new(config, answer, strategy, rng);
            if let Some(word) = first_word {
                solver = solver.with_opening_word(word.clone());
            }
            solver.run()
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut wins = 0;
    let mut total_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for outcome in &outcomes {
        total_guesses += outcome.turns.len();
        if outcome.solved() {
            wins += 1;
            *distribution.entry(outcome.turns.len()).or_insert(0) += 1;
        }
    }

    Ok(BenchmarkReport {
        games,
        wins,
        win_rate: wins as f64 / games.max(1) as f64,
        average_guesses: total_guesses as f64 / games.max(1) as f64,
        distribution,
        duration: start.elapsed(),
    })
}

/// Print a benchmark report.
pub fn print_benchmark_report(report: &BenchmarkReport) {
    println!("\nGames:           {}", report.games);
    println!("Wins:            {}", report.wins);
    println!("Win rate:        {:.1}%", report.win_rate * 100.0);
    println!("Average guesses: {:.2}", report.average_guesses);
    println!("Elapsed:         {:.2?}", report.duration);

    println!("\nGuesses | Wins");
    println!("--------+------");
    for guesses in 1..=crate::game::MAX_GUESSES {
        let count = report.distribution.get(&guesses).copied().unwrap_or(0);
        println!("{guesses:>7} | {count}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::from_texts(
            &["crate", "irate", "grate", "slate", "cigar", "pivot", "proms"],
            &["crate", "irate", "pivot"],
        )
    }

    #[test]
    fn benchmark_counts_every_game() {
        let config = config();
        let report =
            run_benchmark(&config, StrategyType::Entropy, 10, None, 42).unwrap();
        assert_eq!(report.games, 10);
        assert!(report.wins <= 10);
        let distribution_sum: usize = report.distribution.values().sum();
        assert_eq!(distribution_sum, report.wins);
    }

    #[test]
    fn benchmark_is_reproducible_for_a_seed() {
        let config = config();
        let a = run_benchmark(&config, StrategyType::UniqueLetterPriority, 8, None, 7).unwrap();
        let b = run_benchmark(&config, StrategyType::UniqueLetterPriority, 8, None, 7).unwrap();
        assert_eq!(a.wins, b.wins);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn forced_first_word_applies_to_every_game() {
        let config = config();
        let first = Word::new("cigar").unwrap();
        let report =
            run_benchmark(&config, StrategyType::Entropy, 5, Some(&first), 3).unwrap();
        assert_eq!(report.games, 5);
    }
}
