//! Feature pointers: where on the board a feature was occupied.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::location::Location;
use super::position::Position;

/// A board position paired with the location tag on that tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeaturePointer {
    pub position: Position,
    pub location: Location,
}

impl FeaturePointer {
    pub const fn new(position: Position, location: Location) -> Self {
        FeaturePointer { position, location }
    }
}

impl fmt::Display for FeaturePointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.position, self.location)
    }
}
