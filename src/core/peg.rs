//! Peg colors and their names
//!
//! Seven peg values exist. Four of them are code colors that may appear in a
//! secret or a guess, three are key colors used for feedback. `Black` doubles as
//! the empty slot of both kinds of rows.

use super::error::{GameError, Result};
use super::ROW_LENGTH;
use std::fmt;
use std::str::FromStr;

/// A single peg on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    Red,
    Green,
    Blue,
    Yellow,
    White,
    Cyan,
    Black,
}

/// Colors a code maker or code breaker may choose from, in the order the smart
/// bot tries them
pub const CODE_PEGS: [Peg; 4] = [Peg::Red, Peg::Green, Peg::Blue, Peg::Yellow];

/// Colors allowed in a feedback row
pub const KEY_PEGS: [Peg; 3] = [Peg::White, Peg::Cyan, Peg::Black];

/// The empty slot
pub const EMPTY: Peg = Peg::Black;

impl Peg {
    /// Every peg value, code colors first
    pub const ALL: [Self; 7] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::White,
        Self::Cyan,
        Self::Black,
    ];

    /// Uppercase color name of this peg
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
            Self::Yellow => "YELLOW",
            Self::White => "WHITE",
            Self::Cyan => "CYAN",
            Self::Black => "BLACK",
        }
    }

    /// Look a peg up by its exact color name, ignoring case
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Peg;
    ///
    /// assert_eq!(Peg::from_name("Red"), Some(Peg::Red));
    /// assert_eq!(Peg::from_name("cYaN"), Some(Peg::Cyan));
    /// assert_eq!(Peg::from_name(" cyan "), None);
    /// assert_eq!(Peg::from_name("brown"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|peg| peg.name().eq_ignore_ascii_case(name))
    }

    /// Look up a code color (Red, Green, Blue or Yellow)
    ///
    /// # Errors
    /// Returns `GameError::InvalidPegColor` for any other name, including the key colors.
    pub fn code_from_name(name: &str) -> Result<Self> {
        Self::from_name(name)
            .filter(|peg| peg.is_code())
            .ok_or(GameError::InvalidPegColor)
    }

    /// Look up a key color (White, Cyan or Black)
    ///
    /// # Errors
    /// Returns `GameError::InvalidKeyPegColor` for any other name.
    pub fn key_from_name(name: &str) -> Result<Self> {
        Self::from_name(name)
            .filter(|peg| peg.is_key())
            .ok_or(GameError::InvalidKeyPegColor)
    }

    /// True for Red, Green, Blue and Yellow
    #[inline]
    #[must_use]
    pub const fn is_code(self) -> bool {
        matches!(self, Self::Red | Self::Green | Self::Blue | Self::Yellow)
    }

    /// True for White, Cyan and Black
    #[inline]
    #[must_use]
    pub const fn is_key(self) -> bool {
        matches!(self, Self::White | Self::Cyan | Self::Black)
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Peg {
    type Err = GameError;

    /// Parses code colors only; key colors are never typed in by players
    fn from_str(s: &str) -> Result<Self> {
        Self::code_from_name(s)
    }
}

/// Check that a list of color names is a valid code or guess
///
/// # Errors
/// - `GameError::InvalidAmountOfPegs` if the list does not hold exactly `ROW_LENGTH` names
/// - `GameError::InvalidPegColor` if any name is not a code color
///
/// # Examples
/// ```
/// use mastermind::core::{validate_guess, GameError};
///
/// assert!(validate_guess(&["red", "Green", "BLUE", "yellow"]).is_ok());
/// assert_eq!(validate_guess(&["red"]), Err(GameError::InvalidAmountOfPegs(1)));
/// ```
pub fn validate_guess<S: AsRef<str>>(colors: &[S]) -> Result<()> {
    if colors.len() != ROW_LENGTH {
        return Err(GameError::InvalidAmountOfPegs(colors.len()));
    }

    colors
        .iter()
        .try_for_each(|color| Peg::code_from_name(color.as_ref()).map(|_| ()))
}
