//! Location tags naming the sub-region of a tile a meeple stands on.
//!
//! Edge locations follow compass order starting at north. `Cloister` and
//! `Tower` name the tile centre features, and `Prison` is not a place on a
//! tile at all: it marks a captured meeple held by another player.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The number of location tags, including `Prison`.
pub const LOCATION_COUNT: usize = 11;

/// A sub-region of a tile, or the prison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Location {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
    Cloister = 8,
    Tower = 9,
    Prison = 10,
}

/// All location variants in index order.
pub const ALL_LOCATIONS: [Location; LOCATION_COUNT] = [
    Location::North,
    Location::NorthEast,
    Location::East,
    Location::SouthEast,
    Location::South,
    Location::SouthWest,
    Location::West,
    Location::NorthWest,
    Location::Cloister,
    Location::Tower,
    Location::Prison,
];

impl Location {
    /// Returns the short tag used in logs and feature pointers.
    pub const fn short_name(self) -> &'static str {
        match self {
            Location::North => "N",
            Location::NorthEast => "NE",
            Location::East => "E",
            Location::SouthEast => "SE",
            Location::South => "S",
            Location::SouthWest => "SW",
            Location::West => "W",
            Location::NorthWest => "NW",
            Location::Cloister => "CLOISTER",
            Location::Tower => "TOWER",
            Location::Prison => "PRISON",
        }
    }

    /// Parses a location from its short tag.
    pub fn from_short_name(s: &str) -> Option<Location> {
        ALL_LOCATIONS.iter().copied().find(|l| l.short_name() == s)
    }

    pub const fn is_prison(self) -> bool {
        matches!(self, Location::Prison)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
