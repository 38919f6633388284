//! Code and guess strategies
//!
//! Defines the Strategy trait and the human and random implementations.

use super::smart::SmartBot;
use crate::core::{CODE_PEGS, GameError, ROW_LENGTH, Result, Row};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uppercase color names of a code or a guess
pub type Colors = [&'static str; ROW_LENGTH];

/// Read-only view of the board a strategy may look at
///
/// Handed to a strategy on every call instead of being stored, so no strategy
/// holds on to the game that owns it.
#[derive(Debug, Clone, Copy)]
pub struct Board<'a> {
    rows: &'a [Row],
    coded_row: &'a Row,
}

impl<'a> Board<'a> {
    #[must_use]
    pub const fn new(rows: &'a [Row], coded_row: &'a Row) -> Self {
        Self { rows, coded_row }
    }

    /// Attempt rows of the current turn, including the ones not played yet
    #[must_use]
    pub const fn rows(&self) -> &'a [Row] {
        self.rows
    }

    /// The secret row of the current turn
    #[must_use]
    pub const fn coded_row(&self) -> &'a Row {
        self.coded_row
    }
}

/// Something that can come up with a secret code or a guess
pub trait Strategy {
    /// Produce the secret code for a turn
    ///
    /// `input` is what a human typed; computer strategies ignore it.
    ///
    /// # Errors
    /// Returns a validation error if the colors are not a valid code.
    fn code_pegs_colors(&mut self, input: Option<&[&str]>, board: Board<'_>) -> Result<Colors>;

    /// Produce the next guess for a turn
    ///
    /// # Errors
    /// Returns a validation error if the colors are not a valid guess.
    fn guess_pegs_colors(&mut self, input: Option<&[&str]>, board: Board<'_>) -> Result<Colors>;
}

/// Enum wrapper for all strategy types
///
/// Allows the presentation layer to check whether a player needs to be prompted
/// while keeping static dispatch.
#[derive(Debug)]
pub enum StrategyType {
    /// Colors typed in by a person
    Human(Human),
    /// Uniformly random colors
    Random(RandomBot),
    /// Solid colors first, then arrangements of the secret
    Smart(SmartBot),
}

impl Strategy for StrategyType {
    fn code_pegs_colors(&mut self, input: Option<&[&str]>, board: Board<'_>) -> Result<Colors> {
        match self {
            Self::Human(s) => s.code_pegs_colors(input, board),
            Self::Random(s) => s.code_pegs_colors(input, board),
            Self::Smart(s) => s.code_pegs_colors(input, board),
        }
    }

    fn guess_pegs_colors(&mut self, input: Option<&[&str]>, board: Board<'_>) -> Result<Colors> {
        match self {
            Self::Human(s) => s.guess_pegs_colors(input, board),
            Self::Random(s) => s.guess_pegs_colors(input, board),
            Self::Smart(s) => s.guess_pegs_colors(input, board),
        }
    }
}

/// Human player
///
/// Only validates what was typed in. Coding and guessing are the same skill.
#[derive(Debug, Clone, Copy, Default)]
pub struct Human;

impl Strategy for Human {
    fn code_pegs_colors(&mut self, input: Option<&[&str]>, board: Board<'_>) -> Result<Colors> {
        self.guess_pegs_colors(input, board)
    }

    fn guess_pegs_colors(&mut self, input: Option<&[&str]>, _board: Board<'_>) -> Result<Colors> {
        let input = input.ok_or(GameError::InvalidAmountOfPegs(0))?;
        Ok(Row::from_colors(input)?.colors())
    }
}

/// Bot picking every slot uniformly at random, repeats allowed
#[derive(Debug, Clone)]
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    /// Random bot seeded from the thread-local generator
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Random bot with reproducible choices
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomBot {
    fn code_pegs_colors(&mut self, _input: Option<&[&str]>, _board: Board<'_>) -> Result<Colors> {
        Ok(random_colors(&mut self.rng))
    }

    fn guess_pegs_colors(&mut self, _input: Option<&[&str]>, _board: Board<'_>) -> Result<Colors> {
        Ok(random_colors(&mut self.rng))
    }
}

/// Sample each slot independently from the code colors
pub(crate) fn random_colors<R: Rng + ?Sized>(rng: &mut R) -> Colors {
    std::array::from_fn(|_| CODE_PEGS[rng.random_range(0..CODE_PEGS.len())].name())
}
