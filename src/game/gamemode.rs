//! Who plays against whom

use crate::core::GameError;
use std::fmt;
use std::str::FromStr;

/// Pairing of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gamemode {
    /// Two people
    #[default]
    Pvp,
    /// A person against the random bot
    Pve,
    /// A person against the smart bot
    PveSmart,
}

impl Gamemode {
    /// Every gamemode, in menu order
    pub const ALL: [Self; 3] = [Self::Pvp, Self::Pve, Self::PveSmart];

    /// Select a gamemode by its menu number (1, 2 or 3)
    ///
    /// # Errors
    /// Returns `GameError::InvalidGamemode` for any other number.
    pub fn from_number(number: u32) -> Result<Self, GameError> {
        match number {
            1 => Ok(Self::Pvp),
            2 => Ok(Self::Pve),
            3 => Ok(Self::PveSmart),
            other => Err(GameError::InvalidGamemode(other.to_string())),
        }
    }

    /// Menu number of this gamemode
    #[must_use]
    pub const fn number(self) -> u32 {
        match self {
            Self::Pvp => 1,
            Self::Pve => 2,
            Self::PveSmart => 3,
        }
    }

    /// Short name used on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pvp => "pvp",
            Self::Pve => "pve",
            Self::PveSmart => "pve-smart",
        }
    }

    /// Menu description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Pvp => "Player vs player",
            Self::Pve => "Player vs bot (easy)",
            Self::PveSmart => "Player vs bot (hard)",
        }
    }
}

impl fmt::Display for Gamemode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gamemode {
    type Err = GameError;

    /// Accepts the short names (case-insensitive) or the menu numbers
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "pvp" | "1" => Ok(Self::Pvp),
            "pve" | "easy" | "2" => Ok(Self::Pve),
            "pve-smart" | "pve_smart" | "smart" | "hard" | "3" => Ok(Self::PveSmart),
            _ => Err(GameError::InvalidGamemode(s)),
        }
    }
}
