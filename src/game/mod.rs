//! One puzzle instance: the board of past guesses and the session state
//! machine that owns the secret answer.

mod board;
mod session;

/// Turns allowed per puzzle.
pub const MAX_GUESSES: usize = 6;

pub use board::Board;
pub use session::{GameError, GameSession, GameState};
