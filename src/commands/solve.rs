//! Automated solve command
//!
//! Runs the solver against a known or sampled answer and reports the
//! solution path.

use anyhow::{Context, Result, ensure};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::core::Word;
use crate::output::pattern_to_string;
use crate::solver::{SolveOutcome, SolverLoop, StrategyType};

/// Conventional opening word, played first when present in the
/// dictionary and no explicit opener was given.
const DEFAULT_OPENING_WORD: &str = "proms";

pub struct SolveOptions {
    /// Fixed answer; sampled from the answers list when absent.
    pub answer: Option<String>,
    /// Fixed first guess; the default opener applies when absent.
    pub first_word: Option<String>,
    pub verbose: bool,
}

/// Solve one game and return its outcome.
///
/// # Errors
/// Fails on an invalid answer or opening word, or when the solver
/// cannot finish the game.
pub fn run_solve(
    config: &GameConfig,
    strategy: StrategyType,
    options: &SolveOptions,
    rng: &mut StdRng,
) -> Result<SolveOutcome> {
    let answer = match options.answer.as_deref() {
        Some(text) => {
            let word = Word::new(text).context("invalid answer word")?;
            ensure!(
                config.is_allowed(word.text()),
                "answer {:?} is not in the word list",
                word.text()
            );
            word
        }
        None => config.sample_answer(rng),
    };

    let opening = match options.first_word.as_deref() {
        Some(text) => Some(Word::new(text).context("invalid first word")?),
        None if config.is_allowed(DEFAULT_OPENING_WORD) => {
            Some(Word::new(DEFAULT_OPENING_WORD).context("default opening word")?)
        }
        None => None,
    };

    let solver_rng = StdRng::seed_from_u64(rng.random());
    let mut solver = SolverLoop::new(config, answer, strategy, solver_rng);
    if let Some(word) = opening {
        solver = solver.with_opening_word(word);
    }
    solver.run().context("solve run failed")
}

/// Print the solution path as a turn-by-turn table.
pub fn print_solve_outcome(outcome: &SolveOutcome) {
    println!("\n  # | Guess | Pattern | Score | Remaining");
    println!("  --+-------+---------+-------+----------");
    for (turn, record) in outcome.turns.iter().enumerate() {
        println!(
            "  {} | {} |  {}  |  {:>3}  | {:>8}",
            turn + 1,
            record.word,
            pattern_to_string(&record.pattern),
            record.score,
            record.remaining,
        );
    }
    if outcome.solved() {
        println!(
            "\nSolved {:?} in {} guesses.",
            outcome.answer,
            outcome.turns.len()
        );
    } else {
        println!("\nFailed to solve. The answer was {:?}.", outcome.answer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::from_texts(
            &["crate", "irate", "grate", "slate", "cigar", "proms", "pivot"],
            &["crate", "irate", "pivot"],
        )
    }

    #[test]
    fn solve_with_fixed_answer_reports_it() {
        let config = config();
        let options = SolveOptions {
            answer: Some("pivot".to_owned()),
            first_word: None,
            verbose: false,
        };
        let mut rng = StdRng::seed_from_u64(8);
        let outcome =
            run_solve(&config, StrategyType::Entropy, &options, &mut rng).unwrap();
        assert_eq!(outcome.answer, "pivot");
        assert_eq!(outcome.turns[0].word, "proms");
    }

    #[test]
    fn explicit_first_word_overrides_the_default() {
        let config = config();
        let options = SolveOptions {
            answer: Some("crate".to_owned()),
            first_word: Some("cigar".to_owned()),
            verbose: false,
        };
        let mut rng = StdRng::seed_from_u64(8);
        let outcome =
            run_solve(&config, StrategyType::Entropy, &options, &mut rng).unwrap();
        assert_eq!(outcome.turns[0].word, "cigar");
    }

    #[test]
    fn unknown_answer_is_rejected() {
        let config = config();
        let options = SolveOptions {
            answer: Some("zzzzz".to_owned()),
            first_word: None,
            verbose: false,
        };
        let mut rng = StdRng::seed_from_u64(8);
        assert!(run_solve(&config, StrategyType::Entropy, &options, &mut rng).is_err());
    }
}
