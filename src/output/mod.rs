//! Terminal output formatting
//!
//! Board rendering and pretty-printing of command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_board, print_points, print_rules, print_score_result,
    print_turn_result, print_winner,
};
