//! Deployment eligibility hooks implemented per meeple variant.

use serde::{Deserialize, Serialize};

use super::meeple::{Meeple, MeepleId};
use crate::board::{Feature, FeatureId, FeaturePointer, Location, Tile};

/// Outcome of a deployment eligibility check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeploymentCheck {
    Allowed,
    /// Carries a human-readable reason shown to the player.
    Rejected(String),
}

impl DeploymentCheck {
    pub fn rejected(reason: impl Into<String>) -> Self {
        DeploymentCheck::Rejected(reason.into())
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, DeploymentCheck::Allowed)
    }

    /// Returns the rejection reason, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            DeploymentCheck::Allowed => None,
            DeploymentCheck::Rejected(reason) => Some(reason),
        }
    }
}

/// Behaviour that differs between meeple variants.
///
/// Every method except `name` has a default matching a plain follower.
/// Variants such as big followers, builders or pigs override the checks
/// they need. Implementations must stay free of side effects: the protocol
/// in `Meeple` calls them before anything is mutated.
pub trait DeploymentRules: Sized {
    /// Variant name used in logs and `Display`.
    fn name(&self) -> &'static str;

    /// Decides whether `meeple` may be placed on `feature`.
    fn is_deployment_allowed(&self, _meeple: &Meeple<Self>, _feature: &Feature) -> DeploymentCheck {
        DeploymentCheck::Allowed
    }

    /// Resolves which feature of `tile` a placement at `location` targets.
    fn deployment_feature(&self, tile: &Tile, location: Location) -> Option<FeatureId> {
        tile.feature(location)
    }

    fn can_be_eaten_by_dragon(&self) -> bool {
        true
    }

    /// Called once a meeple has left `source` and its removal event has been
    /// posted; `vacated` no longer lists it. When `check_companions` is set,
    /// returns the companion pieces (a builder or pig left without its
    /// follower) that must leave the feature as well. The base variant has
    /// none.
    fn on_undeployed(
        &self,
        _meeple: &Meeple<Self>,
        _source: FeaturePointer,
        _check_companions: bool,
        _vacated: &Feature,
    ) -> Vec<MeepleId> {
        Vec::new()
    }
}

/// An ordinary follower with the default deployment behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Follower;

impl DeploymentRules for Follower {
    fn name(&self) -> &'static str {
        "Follower"
    }
}
