//! Automated solving: hint accumulation, candidate elimination, and
//! guess-selection strategies.

mod engine;
mod entropy;
mod hints;
mod strategy;
mod universe;

pub use engine::{SolveError, SolveOutcome, SolveState, SolverLoop, TurnRecord};
pub use entropy::{expected_information, select_most_informative};
pub use hints::HintSet;
pub use strategy::{
    EntropyMaximizingStrategy, SCORE_THRESHOLD, SelectionContext, Strategy, StrategyType,
    UniqueLetterStrategy, WeightedRandomStrategy,
};
pub use universe::{CandidateUniverse, EmptyCandidateUniverse};
