//! Command implementations

pub mod benchmark;
pub mod score;
pub mod simple;
pub mod turn;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use score::{ScoreResult, score_guess};
pub use simple::{PlayOptions, run_simple};
pub use turn::{Role, TurnAborted, TurnDriver, TurnOutcome, play_match, play_turn, split_colors};
