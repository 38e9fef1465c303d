//! Plain-text rendering of feedback for the CLI.

mod formatters;

pub use formatters::{pattern_to_string, render_guess};
