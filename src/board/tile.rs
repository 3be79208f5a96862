//! Placed tiles: a board position plus the features found at each location.

use std::collections::HashMap;

use super::feature::FeatureId;
use super::location::Location;
use super::position::Position;

/// A tile placed on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    position: Position,
    features: HashMap<Location, FeatureId>,
}

impl Tile {
    /// Creates a tile at `position` with no features.
    pub fn new(position: Position) -> Self {
        Tile {
            position,
            features: HashMap::new(),
        }
    }

    /// Binds `location` on this tile to a feature.
    pub fn with_feature(mut self, location: Location, feature: FeatureId) -> Self {
        self.features.insert(location, feature);
        self
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the feature found at `location`, if the tile has one there.
    pub fn feature(&self, location: Location) -> Option<FeatureId> {
        self.features.get(&location).copied()
    }
}
