//! The solve loop: strategy, hints, and universe wired to a game
//! session.

use std::fmt;

use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::core::{ResultKind, WORD_LEN, Word};
use crate::game::{GameError, GameSession, GameState};
use crate::solver::hints::HintSet;
use crate::solver::strategy::{SelectionContext, StrategyType};
use crate::solver::universe::{CandidateUniverse, EmptyCandidateUniverse};

/// Reselections allowed in one turn before giving up; only relevant
/// when a strategy proposes words the session rejects.
const MAX_RESELECTIONS: usize = 8;

/// How a solve run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveState {
    /// The answer was found within the guess limit.
    Solved,
    /// All guesses were spent without finding the answer.
    Exhausted,
}

#[derive(Debug)]
pub enum SolveError {
    /// Narrowing removed every candidate.
    EmptyCandidateUniverse,
    /// The strategy produced no playable word.
    NoSelectableGuess,
    Game(GameError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCandidateUniverse => write!(f, "{EmptyCandidateUniverse}"),
            Self::NoSelectableGuess => write!(f, "strategy produced no playable guess"),
            Self::Game(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SolveError {}

impl From<EmptyCandidateUniverse> for SolveError {
    fn from(_: EmptyCandidateUniverse) -> Self {
        Self::EmptyCandidateUniverse
    }
}

impl From<GameError> for SolveError {
    fn from(err: GameError) -> Self {
        Self::Game(err)
    }
}

/// One played turn, recorded for reporting.
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub word: String,
    pub pattern: [ResultKind; WORD_LEN],
    pub score: u16,
    /// Candidates remaining after this turn's narrowing.
    pub remaining: usize,
}

/// The result of a complete solve run.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub state: SolveState,
    pub turns: Vec<TurnRecord>,
    pub answer: String,
}

impl SolveOutcome {
    #[must_use]
    pub fn solved(&self) -> bool {
        self.state == SolveState::Solved
    }
}

/// Drives one game to completion with a strategy.
pub struct SolverLoop<'a> {
    config: &'a GameConfig,
    session: GameSession<'a>,
    strategy: StrategyType,
    hints: HintSet,
    universe: CandidateUniverse,
    rng: StdRng,
    opening_word: Option<Word>,
}

impl<'a> SolverLoop<'a> {
    /// Set up a solve against a known answer. The universe starts over
    /// the full allowed list so uncommon answers stay reachable.
    #[must_use]
    pub fn new(config: &'a GameConfig, answer: Word, strategy: StrategyType, rng: StdRng) -> Self {
        let universe = CandidateUniverse::new(config.allowed(), config.weights());
        Self {
            config,
            session: GameSession::new(config, answer),
            strategy,
            hints: HintSet::new(),
            universe,
            rng,
            opening_word: None,
        }
    }

    /// Force a fixed first guess.
    #[must_use]
    pub fn with_opening_word(mut self, word: Word) -> Self {
        self.opening_word = Some(word);
        self
    }

    /// Play turns until the game ends, narrowing after each one.
    ///
    /// # Errors
    /// Fails when the candidate universe empties, the strategy cannot
    /// produce a playable guess, or the session rejects a turn.
    pub fn run(&mut self) -> Result<SolveOutcome, SolveError> {
        let mut turns = Vec::new();
        while self.session.state() == GameState::InProgress {
            let guess = self.play_turn()?;
            self.hints.update(&guess);
            if self.session.state() == GameState::InProgress {
                self.universe = self.universe.narrowed(guess.word(), &self.hints)?;
            }
            turns.push(TurnRecord {
                word: guess.word().text().to_owned(),
                pattern: guess.pattern(),
                score: guess.score(),
                remaining: self.universe.len(),
            });
        }
        let state = if self.session.state() == GameState::Won {
            SolveState::Solved
        } else {
            SolveState::Exhausted
        };
        Ok(SolveOutcome {
            state,
            turns,
            answer: self.session.answer().text().to_owned(),
        })
    }

    fn play_turn(&mut self) -> Result<crate::core::Guess, SolveError> {
        if self.session.board().is_empty()
            && let Some(opening) = self.opening_word.take()
            && self.config.is_allowed(opening.text())
        {
            return Ok(self.session.make_guess(opening.text())?);
        }

        for _ in 0..MAX_RESELECTIONS {
            let word = self.select().ok_or(SolveError::NoSelectableGuess)?;
            match self.session.make_guess(word.text()) {
                Ok(guess) => return Ok(guess),
                // The session vetoed the word; pick again.
                Err(GameError::InvalidGuess(_)) => {}
                Err(err) => return Err(err.into()),
            }
        }
        Err(SolveError::NoSelectableGuess)
    }

    fn select(&mut self) -> Option<Word> {
        if self.universe.len() == 1 {
            return self.universe.words().next().cloned();
        }
        let last_score = self.session.board().last().map_or(0, |g| g.score());
        let ctx = SelectionContext {
            universe: &self.universe,
            guess_pool: self.config.allowed(),
            weights: self.config.weights(),
            guesses_used: self.session.guesses_used(),
            last_score,
        };
        self.strategy.select_guess(&ctx, &mut self.rng)
    }
}
