//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use assist::run_assist;
pub use benchmark::{BenchmarkReport, print_benchmark_report, run_benchmark};
pub use play::run_play;
pub use solve::{SolveOptions, print_solve_outcome, run_solve};
