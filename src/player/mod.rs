//! Players and the strategies they use to pick codes and guesses

mod smart;
pub mod strategy;

pub use smart::SmartBot;
pub use strategy::{Board, Colors, Human, RandomBot, Strategy, StrategyType};

use crate::core::Result;
use std::fmt;

/// One of the two places at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Both seats, in playing order
    pub const BOTH: [Self; 2] = [Self::First, Self::Second];

    /// Position in the game's player list
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// The seat across the table
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// A participant: name, accumulated points and the strategy behind their moves
#[derive(Debug)]
pub struct Player {
    name: String,
    points: u32,
    strategy: StrategyType,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, strategy: StrategyType) -> Self {
        Self {
            name: name.into(),
            points: 0,
            strategy,
        }
    }

    /// A person typing in colors
    #[must_use]
    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, StrategyType::Human(Human))
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Points collected so far in the match
    #[inline]
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Check if this player's colors come from the keyboard
    #[inline]
    #[must_use]
    pub const fn is_human(&self) -> bool {
        matches!(self.strategy, StrategyType::Human(_))
    }

    #[must_use]
    pub const fn strategy(&self) -> &StrategyType {
        &self.strategy
    }

    pub(crate) fn add_points(&mut self, points: u32) {
        self.points += points;
    }

    /// Colors for the secret code of a turn this player is coding
    ///
    /// # Errors
    /// Returns a validation error for bad human input.
    pub fn code_pegs_colors(&mut self, input: Option<&[&str]>, board: Board<'_>) -> Result<Colors> {
        self.strategy.code_pegs_colors(input, board)
    }

    /// Colors for the next guess of a turn this player is breaking
    ///
    /// # Errors
    /// Returns a validation error for bad human input.
    pub fn guess_pegs_colors(&mut self, input: Option<&[&str]>, board: Board<'_>) -> Result<Colors> {
        self.strategy.guess_pegs_colors(input, board)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
