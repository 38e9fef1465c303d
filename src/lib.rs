//! Wordle Pilot
//!
//! A Wordle game engine and adaptive solver. Feedback is the canonical
//! two-pass scoring (exact matches first, then leftover letters), and
//! solving is candidate elimination over a weighted word universe with
//! pluggable guess-selection strategies.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_pilot::core::{Guess, Word};
//!
//! let guess = Guess::calculate(
//!     &Word::new("alloy").unwrap(),
//!     &Word::new("lolly").unwrap(),
//! );
//! assert_eq!(guess.score(), 60);
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Solving algorithms
pub mod solver;

// Word lists and prior weights
pub mod wordlists;

// Load-once configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
