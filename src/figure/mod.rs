//! Meeples and the per-variant deployment rules.

pub mod meeple;
pub mod rules;

pub use meeple::{Meeple, MeepleId, MeepleState};
pub use rules::{DeploymentCheck, DeploymentRules, Follower};
