//! Turn-taking state machine for one puzzle instance.

use std::fmt;

use rand::Rng;

use super::{Board, MAX_GUESSES};
use crate::config::GameConfig;
use crate::core::{Guess, Word};

/// Session lifecycle. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// Recoverable failures of [`GameSession::make_guess`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The word is not on the allowed list. The turn is not consumed and
    /// nothing about the session changes.
    InvalidGuess(String),
    /// The session already reached a terminal state.
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(word) => write!(f, "\"{word}\" is not on the word list"),
            Self::GameOver => write!(f, "the game is already over"),
        }
    }
}

impl std::error::Error for GameError {}

/// One puzzle: owns the secret answer and the board for its lifetime.
pub struct GameSession<'a> {
    config: &'a GameConfig,
    answer: Word,
    board: Board,
    state: GameState,
}

impl<'a> GameSession<'a> {
    /// Start a session with a fixed secret answer.
    #[must_use]
    pub fn new(config: &'a GameConfig, answer: Word) -> Self {
        Self {
            config,
            answer,
            board: Board::new(),
            state: GameState::InProgress,
        }
    }

    /// Start a session with a secret drawn from the possible-answers list,
    /// biased by the prior weights.
    pub fn with_random_answer<R: Rng + ?Sized>(config: &'a GameConfig, rng: &mut R) -> Self {
        let answer = config.sample_answer(rng);
        Self::new(config, answer)
    }

    /// Submit one guess.
    ///
    /// The word must be on the allowed list and the session must still be
    /// in progress; otherwise the call fails without consuming a turn or
    /// touching the board.
    ///
    /// # Errors
    /// `GameError::GameOver` after a terminal state, `GameError::InvalidGuess`
    /// for a word outside the dictionary.
    pub fn make_guess(&mut self, raw: &str) -> Result<Guess, GameError> {
        if self.state != GameState::InProgress {
            return Err(GameError::GameOver);
        }

        let raw = raw.trim().to_lowercase();
        let Some(word) = self.config.lookup(&raw) else {
            return Err(GameError::InvalidGuess(raw));
        };

        let guess = Guess::calculate(word, &self.answer);
        self.board.push(guess.clone());

        self.state = if guess.is_answer() {
            GameState::Won
        } else if self.board.len() == MAX_GUESSES {
            GameState::Lost
        } else {
            GameState::InProgress
        };

        Ok(guess)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.state, GameState::InProgress)
    }

    /// The secret answer. Callers that want a fair game should only read
    /// this once the session is terminal.
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Turns consumed so far.
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.board.len()
    }

    /// Turns remaining before the session is lost.
    #[must_use]
    pub fn guesses_left(&self) -> usize {
        MAX_GUESSES - self.board.len()
    }
}
