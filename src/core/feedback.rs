//! Mastermind feedback calculation
//!
//! Feedback is a count triple, not a per-slot map: how many pegs match in color
//! and position (white key pegs), how many match in color only (cyan), and how
//! many do not match at all (black). The position of a key peg carries no
//! information, so key pegs are always laid out whites first, then cyans.

use super::ROW_LENGTH;
use super::peg::{EMPTY, Peg};

/// Colors counted when matching two rows; empty slots count as a color of their own
const MATCHED_PEGS: [Peg; 5] = [Peg::Red, Peg::Green, Peg::Yellow, Peg::Blue, EMPTY];

/// Feedback for one row compared against another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    exact: usize,
    color_only: usize,
}

impl Feedback {
    /// All pegs right
    pub const PERFECT: Self = Self {
        exact: ROW_LENGTH,
        color_only: 0,
    };

    /// Calculate the feedback for `guess` compared against `answer`
    ///
    /// # Algorithm
    /// 1. Count slots where both rows hold the same peg
    /// 2. For every color, add the smaller of its two occurrence counts
    /// 3. Color-only matches are that total minus the exact matches
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Feedback, Peg::*};
    ///
    /// let feedback = Feedback::calculate(&[Red, Red, Blue, Blue], &[Red, Red, Red, Blue]);
    /// assert_eq!(feedback.exact(), 3);
    /// assert_eq!(feedback.color_only(), 0);
    /// assert_eq!(feedback.none(), 1);
    /// ```
    #[must_use]
    pub fn calculate(guess: &[Peg; ROW_LENGTH], answer: &[Peg; ROW_LENGTH]) -> Self {
        let exact = guess
            .iter()
            .zip(answer)
            .filter(|(left, right)| left == right)
            .count();

        let total_matches: usize = MATCHED_PEGS
            .iter()
            .map(|color| count_of(guess, *color).min(count_of(answer, *color)))
            .sum();

        Self {
            exact,
            color_only: total_matches - exact,
        }
    }

    /// Build feedback from counts
    ///
    /// Returns `None` if the counts add up to more than `ROW_LENGTH`.
    #[cfg(test)]
    #[must_use]
    pub(crate) const fn from_counts(exact: usize, color_only: usize) -> Option<Self> {
        if exact + color_only > ROW_LENGTH {
            return None;
        }
        Some(Self { exact, color_only })
    }

    /// Pegs right in color and position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Pegs right in color but in the wrong position
    #[inline]
    #[must_use]
    pub const fn color_only(self) -> usize {
        self.color_only
    }

    /// Pegs with no match
    #[inline]
    #[must_use]
    pub const fn none(self) -> usize {
        ROW_LENGTH - self.exact - self.color_only
    }

    /// Check if every peg is right
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.exact == ROW_LENGTH
    }

    /// Lay the feedback out as key pegs: whites, then cyans, then blacks
    #[must_use]
    pub fn key_pegs(self) -> [Peg; ROW_LENGTH] {
        let mut pegs = [Peg::Black; ROW_LENGTH];
        for (i, slot) in pegs.iter_mut().enumerate() {
            if i < self.exact {
                *slot = Peg::White;
            } else if i < self.exact + self.color_only {
                *slot = Peg::Cyan;
            }
        }
        pegs
    }

    /// Read feedback back from a key peg row
    ///
    /// Order does not matter, only how many pegs of each key color there are.
    #[must_use]
    pub fn from_key_pegs(pegs: &[Peg; ROW_LENGTH]) -> Self {
        Self {
            exact: count_of(pegs, Peg::White),
            color_only: count_of(pegs, Peg::Cyan),
        }
    }
}

fn count_of(pegs: &[Peg; ROW_LENGTH], color: Peg) -> usize {
    pegs.iter().filter(|&&peg| peg == color).count()
}
