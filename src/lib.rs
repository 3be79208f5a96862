//! Meeple deployment lifecycle for a tile-placement board game engine.
//!
//! Exposes the board collaborators, the meeple state machine with its
//! feature-binding protocol, the events it posts, and a game session that
//! owns the players' supplies.

pub mod board;
pub mod config;
pub mod error;
pub mod event;
pub mod figure;
pub mod game;
pub mod player;

pub use config::SessionConfig;
pub use error::{MeepleError, Result};
pub use event::{EventQueue, EventSink, MeepleEvent, MeepleEventKind};
pub use figure::{DeploymentCheck, DeploymentRules, Follower, Meeple, MeepleId, MeepleState};
pub use game::{undeploy_with_companions, GameContext, Session, Turn};
pub use player::PlayerId;
