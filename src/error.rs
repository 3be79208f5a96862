//! Errors raised by the deployment protocol and the session around it.

use thiserror::Error;

use crate::board::{FeatureId, FeaturePointer};
use crate::figure::{MeepleId, MeepleState};
use crate::player::PlayerId;

/// Errors that can occur while deploying or undeploying meeples.
#[derive(Debug, Error)]
pub enum MeepleError {
    /// A rule rejected the placement. The move should be refused and the
    /// player asked again; the meeple is left untouched.
    #[error("invalid deployment: {0}")]
    InvalidDeployment(String),

    /// The operation is not legal from the meeple's current state. This is a
    /// bug in the calling turn logic rather than a player mistake.
    #[error("cannot {operation} meeple {meeple} while {state}")]
    InvalidStateTransition {
        meeple: MeepleId,
        operation: &'static str,
        state: MeepleState,
    },

    #[error("no feature at {0}")]
    NoFeature(FeaturePointer),

    #[error("unknown feature {0:?}")]
    UnknownFeature(FeatureId),

    #[error("unknown meeple {0}")]
    UnknownMeeple(MeepleId),

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("player {0} has no meeple left in supply")]
    EmptySupply(PlayerId),

    #[error("invalid session config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse session config: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MeepleError>;
