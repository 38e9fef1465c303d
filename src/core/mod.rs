//! Core domain types for the word game
//!
//! Pure types with no I/O: validated words, per-letter feedback kinds, and
//! the scored guess they combine into.

mod feedback;
mod word;

/// Length of every word in the game.
pub const WORD_LEN: usize = 5;

pub use feedback::{FeedbackToken, Guess, MAX_SCORE, ResultKind, parse_pattern};
pub use word::{Word, WordError};
