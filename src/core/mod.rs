//! Core domain types for Mastermind
//!
//! Pegs, rows and the feedback algorithm. Everything here is pure: no I/O, no
//! logging, no randomness.

mod error;
mod feedback;
mod peg;
mod row;

pub use error::{GameError, Result};
pub use feedback::Feedback;
pub use peg::{CODE_PEGS, EMPTY, KEY_PEGS, Peg, validate_guess};
pub use row::Row;

/// Number of pegs in a row
pub const ROW_LENGTH: usize = 4;
