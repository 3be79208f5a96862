//! Features and the feature registry.
//!
//! A feature is a scoreable region (road, city, field, ...) spanning one or
//! more tiles. Meeples refer to features by `FeatureId`, an index into the
//! `Features` registry owned by the board; the feature in turn keeps the
//! list of meeples occupying it.

use serde::{Deserialize, Serialize};

use crate::figure::MeepleId;

/// Index of a feature in the `Features` registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FeatureId(pub u32);

/// The kind of region a feature covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    Road,
    City,
    Field,
    Cloister,
    Tower,
}

/// A feature together with the meeples occupying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    id: FeatureId,
    kind: FeatureKind,
    meeples: Vec<MeepleId>,
}

impl Feature {
    pub fn new(id: FeatureId, kind: FeatureKind) -> Self {
        Feature {
            id,
            kind,
            meeples: Vec::new(),
        }
    }

    pub fn id(&self) -> FeatureId {
        self.id
    }

    pub fn kind(&self) -> FeatureKind {
        self.kind
    }

    /// Meeples on this feature, in the order they were placed.
    pub fn meeples(&self) -> &[MeepleId] {
        &self.meeples
    }

    pub fn is_occupied(&self) -> bool {
        !self.meeples.is_empty()
    }

    pub fn contains(&self, meeple: MeepleId) -> bool {
        self.meeples.contains(&meeple)
    }

    /// Registers an occupying meeple. Duplicates are not checked; callers
    /// only add a meeple that is not yet deployed.
    pub fn add_meeple(&mut self, meeple: MeepleId) {
        self.meeples.push(meeple);
    }

    /// Unregisters a meeple. Removing a meeple that is not present is a no-op.
    pub fn remove_meeple(&mut self, meeple: MeepleId) {
        if let Some(i) = self.meeples.iter().position(|&m| m == meeple) {
            self.meeples.remove(i);
        }
    }
}

/// Registry of all features on the board, addressed by `FeatureId`.
#[derive(Debug, Clone, Default)]
pub struct Features {
    features: Vec<Feature>,
}

impl Features {
    pub fn new() -> Self {
        Features::default()
    }

    /// Adds a new empty feature and returns its id.
    pub fn insert(&mut self, kind: FeatureKind) -> FeatureId {
        let id = FeatureId(self.features.len() as u32);
        self.features.push(Feature::new(id, kind));
        id
    }

    pub fn get(&self, id: FeatureId) -> Option<&Feature> {
        self.features.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: FeatureId) -> Option<&mut Feature> {
        self.features.get_mut(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }
}
