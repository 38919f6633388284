//! A row on the Mastermind board
//!
//! A row is one attempt (or the secret code): `ROW_LENGTH` code pegs plus
//! `ROW_LENGTH` key pegs describing how well the code pegs matched.

use super::ROW_LENGTH;
use super::error::{GameError, Result};
use super::feedback::Feedback;
use super::peg::{EMPTY, Peg};

/// Code pegs and key pegs of a single row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    pegs: [Peg; ROW_LENGTH],
    key_pegs: [Peg; ROW_LENGTH],
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Row {
    /// Create a row with every slot empty
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pegs: [EMPTY; ROW_LENGTH],
            key_pegs: [EMPTY; ROW_LENGTH],
        }
    }

    /// Create a row holding the given code colors
    ///
    /// # Errors
    /// Same as [`Row::set_pegs`].
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Row;
    ///
    /// let row = Row::from_colors(&["Blue", "Green", "Yellow", "Red"]).unwrap();
    /// assert_eq!(row.colors(), ["BLUE", "GREEN", "YELLOW", "RED"]);
    ///
    /// assert!(Row::from_colors(&["Brown", "Red", "Green", "Green"]).is_err());
    /// ```
    pub fn from_colors<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
        let mut row = Self::new();
        row.set_pegs(Some(colors))?;
        Ok(row)
    }

    /// Code pegs of this row
    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> &[Peg; ROW_LENGTH] {
        &self.pegs
    }

    /// Key pegs of this row
    #[inline]
    #[must_use]
    pub const fn key_pegs(&self) -> &[Peg; ROW_LENGTH] {
        &self.key_pegs
    }

    /// Uppercase color names of the code pegs
    #[must_use]
    pub fn colors(&self) -> [&'static str; ROW_LENGTH] {
        self.pegs.map(Peg::name)
    }

    /// Uppercase color names of the key pegs
    #[must_use]
    pub fn key_colors(&self) -> [&'static str; ROW_LENGTH] {
        self.key_pegs.map(Peg::name)
    }

    /// Check if no code peg has been placed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pegs.iter().all(|&peg| peg == EMPTY)
    }

    /// Replace the code pegs
    ///
    /// `None` empties every slot. Otherwise exactly `ROW_LENGTH` code colors are
    /// required (case-insensitive). The whole list is validated before any slot
    /// changes, so a failed call leaves the row untouched.
    ///
    /// # Errors
    /// - `GameError::InvalidAmountOfPegs` for a list of the wrong length
    /// - `GameError::InvalidPegColor` for a color outside Red, Green, Blue, Yellow
    pub fn set_pegs<S: AsRef<str>>(&mut self, colors: Option<&[S]>) -> Result<()> {
        self.pegs = parse_row(colors, Peg::code_from_name)?;
        Ok(())
    }

    /// Replace the key pegs
    ///
    /// `None` empties every slot.
    ///
    /// # Errors
    /// - `GameError::InvalidAmountOfPegs` for a list of the wrong length
    /// - `GameError::InvalidKeyPegColor` for a color outside White, Cyan, Black
    pub fn set_key_pegs<S: AsRef<str>>(&mut self, colors: Option<&[S]>) -> Result<()> {
        self.key_pegs = parse_row(colors, Peg::key_from_name)?;
        Ok(())
    }

    /// Feedback for this row's code pegs measured against `other`'s
    #[must_use]
    pub fn feedback(&self, other: &Self) -> Feedback {
        Feedback::calculate(&self.pegs, &other.pegs)
    }

    /// Compare this row against `other` and install the result as this row's key pegs
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Row;
    ///
    /// let secret = Row::from_colors(&["Red", "Red", "Red", "Blue"]).unwrap();
    /// let mut guess = Row::from_colors(&["Red", "Red", "Blue", "Blue"]).unwrap();
    /// guess.compare_pegs(&secret);
    /// assert_eq!(guess.key_colors(), ["WHITE", "WHITE", "WHITE", "BLACK"]);
    /// ```
    pub fn compare_pegs(&mut self, other: &Self) {
        self.key_pegs = self.feedback(other).key_pegs();
    }
}

/// Validate a full list of color names into a row of pegs
fn parse_row<S, F>(colors: Option<&[S]>, parse: F) -> Result<[Peg; ROW_LENGTH]>
where
    S: AsRef<str>,
    F: Fn(&str) -> Result<Peg>,
{
    let mut pegs = [EMPTY; ROW_LENGTH];
    let Some(colors) = colors else {
        return Ok(pegs);
    };

    if colors.len() != ROW_LENGTH {
        return Err(GameError::InvalidAmountOfPegs(colors.len()));
    }

    for (index, color) in colors.iter().enumerate() {
        set_slot(&mut pegs, index, parse(color.as_ref())?)?;
    }

    Ok(pegs)
}

fn set_slot(pegs: &mut [Peg; ROW_LENGTH], index: usize, peg: Peg) -> Result<()> {
    let slot = pegs
        .get_mut(index)
        .ok_or(GameError::InvalidPegIndex(index))?;
    *slot = peg;
    Ok(())
}
