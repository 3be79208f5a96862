//! Meeple events and the queue they are posted to.
//!
//! Every deploy posts one event with a destination and no source; every
//! undeploy posts one with a source and no destination. Events are only
//! built through `MeepleEvent::deployed` and `MeepleEvent::undeployed`.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::board::FeaturePointer;
use crate::figure::{Meeple, MeepleId};
use crate::player::PlayerId;

/// Direction of a meeple transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeepleEventKind {
    Deployed,
    Undeployed,
}

/// Notification that a meeple was placed on or removed from the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMeepleEvent")]
pub struct MeepleEvent {
    player: PlayerId,
    meeple: MeepleId,
    owner: PlayerId,
    source: Option<FeaturePointer>,
    destination: Option<FeaturePointer>,
}

impl MeepleEvent {
    /// A meeple left supply for `destination`. `player` is the acting
    /// player, which need not be the owner.
    pub fn deployed<R>(player: PlayerId, meeple: &Meeple<R>, destination: FeaturePointer) -> Self {
        MeepleEvent {
            player,
            meeple: meeple.id(),
            owner: meeple.owner(),
            source: None,
            destination: Some(destination),
        }
    }

    /// A meeple was taken off `source`.
    pub fn undeployed<R>(player: PlayerId, meeple: &Meeple<R>, source: FeaturePointer) -> Self {
        MeepleEvent {
            player,
            meeple: meeple.id(),
            owner: meeple.owner(),
            source: Some(source),
            destination: None,
        }
    }

    pub fn kind(&self) -> MeepleEventKind {
        if self.destination.is_some() {
            MeepleEventKind::Deployed
        } else {
            MeepleEventKind::Undeployed
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn meeple(&self) -> MeepleId {
        self.meeple
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn source(&self) -> Option<FeaturePointer> {
        self.source
    }

    pub fn destination(&self) -> Option<FeaturePointer> {
        self.destination
    }
}

/// Wire form of `MeepleEvent`, checked before it becomes one.
#[derive(Deserialize)]
struct RawMeepleEvent {
    player: PlayerId,
    meeple: MeepleId,
    owner: PlayerId,
    source: Option<FeaturePointer>,
    destination: Option<FeaturePointer>,
}

impl TryFrom<RawMeepleEvent> for MeepleEvent {
    type Error = String;

    fn try_from(raw: RawMeepleEvent) -> Result<Self, Self::Error> {
        if raw.source.is_some() == raw.destination.is_some() {
            return Err("meeple event needs exactly one of source and destination".to_string());
        }
        Ok(MeepleEvent {
            player: raw.player,
            meeple: raw.meeple,
            owner: raw.owner,
            source: raw.source,
            destination: raw.destination,
        })
    }
}

/// Anything meeple events can be posted to.
pub trait EventSink {
    fn post(&mut self, event: MeepleEvent);
}

/// FIFO of posted events, drained by the session's observers.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<MeepleEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        EventQueue::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MeepleEvent> {
        self.events.iter()
    }

    /// Removes and yields queued events in posting order.
    pub fn drain(&mut self) -> impl Iterator<Item = MeepleEvent> + '_ {
        self.events.drain(..)
    }
}

impl EventSink for EventQueue {
    fn post(&mut self, event: MeepleEvent) {
        self.events.push_back(event);
    }
}
