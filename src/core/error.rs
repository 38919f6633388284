//! Validation errors raised by the game core

use super::ROW_LENGTH;
use thiserror::Error;

/// Errors produced by the Mastermind core
///
/// Every variant is a local validation failure, returned at the point where the
/// invalid input is seen. Nothing is silently corrected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A code slot was given something other than Red, Green, Blue or Yellow
    #[error("invalid peg color, color has to be either Red, Green, Yellow or Blue")]
    InvalidPegColor,

    /// A key slot was given something other than White, Cyan or Black
    #[error("invalid key peg color, color has to be either White, Cyan or Black")]
    InvalidKeyPegColor,

    /// A color list did not have exactly `ROW_LENGTH` entries
    #[error("there are {len} pegs in total, got {0}", len = ROW_LENGTH)]
    InvalidAmountOfPegs(usize),

    /// A peg index outside `0..ROW_LENGTH`
    #[error("invalid peg index {0}, index has to be in range 0 - {max}", max = ROW_LENGTH - 1)]
    InvalidPegIndex(usize),

    /// Amount of rounds outside `1..=10`
    #[error("amount of rounds has to be between 1 and 10, got {0}")]
    InvalidRounds(u32),

    /// Unknown gamemode name or menu number
    #[error("invalid gamemode '{0}', expected 1 (pvp), 2 (pve) or 3 (pve-smart)")]
    InvalidGamemode(String),

    /// A row index outside the board
    #[error("invalid row index {0}, the board has no such row")]
    InvalidRowIndex(usize),

    /// A board with no rows to guess in
    #[error("amount of rows has to be at least 1, got {0}")]
    InvalidAmountOfRows(usize),
}

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, GameError>;
