//! Word-list sources: embedded defaults, file loading, and prior weights.

mod embedded;
mod loader;
mod weights;

pub use loader::{load_from_file, parse_word_list};
pub use weights::WeightTable;

use anyhow::Result;

use crate::core::Word;

/// Default guessable-word list compiled into the binary.
pub fn embedded_allowed() -> Result<Vec<Word>> {
    parse_word_list(embedded::DEFAULT_ALLOWED)
}

/// Default possible-answers list compiled into the binary.
pub fn embedded_answers() -> Result<Vec<Word>> {
    parse_word_list(embedded::DEFAULT_ANSWERS)
}
