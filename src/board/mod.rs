//! Board collaborators of the meeple lifecycle.
//!
//! Contains positions, location tags, feature pointers, tiles, and the
//! feature registry that keeps each feature's occupancy list.

pub mod feature;
pub mod location;
pub mod pointer;
pub mod position;
pub mod tile;

pub use feature::{Feature, FeatureId, FeatureKind, Features};
pub use location::{Location, ALL_LOCATIONS, LOCATION_COUNT};
pub use pointer::FeaturePointer;
pub use position::Position;
pub use tile::Tile;
