//! Word lists embedded at compile time so the binary works with no data
//! files installed.

pub static DEFAULT_ALLOWED: &str = include_str!("../../data/allowed.txt");
pub static DEFAULT_ANSWERS: &str = include_str!("../../data/answers.txt");
