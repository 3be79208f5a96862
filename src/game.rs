//! Game context seen by the deployment protocol, and the session that owns
//! players, meeples, features and the event queue.

use log::debug;

use crate::board::{Features, Location, Tile};
use crate::config::SessionConfig;
use crate::error::{MeepleError, Result};
use crate::event::{EventQueue, EventSink, MeepleEvent};
use crate::figure::{DeploymentRules, Follower, Meeple, MeepleId};
use crate::player::PlayerId;

/// What a meeple needs from the game while it changes state: who is acting,
/// and where to post the resulting event.
pub trait GameContext {
    fn active_player(&self) -> PlayerId;

    /// Fire-and-forget notification.
    fn post(&mut self, event: MeepleEvent);
}

/// The active player's turn, posting into a borrowed sink.
pub struct Turn<'a, S> {
    active_player: PlayerId,
    sink: &'a mut S,
}

impl<'a, S: EventSink> Turn<'a, S> {
    pub fn new(active_player: PlayerId, sink: &'a mut S) -> Self {
        Turn { active_player, sink }
    }
}

impl<S: EventSink> GameContext for Turn<'_, S> {
    fn active_player(&self) -> PlayerId {
        self.active_player
    }

    fn post(&mut self, event: MeepleEvent) {
        self.sink.post(event);
    }
}

/// Undeploys `id`, then every companion the variants report as stranded.
///
/// Only the first removal checks for companions; cascaded removals are
/// taken off with the check disabled.
pub fn undeploy_with_companions<R: DeploymentRules, G: GameContext>(
    meeples: &mut [Meeple<R>],
    id: MeepleId,
    features: &mut Features,
    game: &mut G,
) -> Result<()> {
    let mut pending = vec![(id, true)];
    while let Some((id, check_companions)) = pending.pop() {
        let meeple = meeples
            .iter_mut()
            .find(|m| m.id() == id)
            .ok_or(MeepleError::UnknownMeeple(id))?;
        let stranded = meeple.undeploy_with(check_companions, features, game)?;
        pending.extend(stranded.into_iter().map(|companion| (companion, false)));
    }
    Ok(())
}

/// A running game: every player's followers, the board's features, and the
/// queue of events not yet consumed by observers.
///
/// Followers are created once at setup and live for the whole session;
/// `MeepleId`s index into them.
#[derive(Debug, Clone)]
pub struct Session {
    players: Vec<PlayerId>,
    active: usize,
    followers: Vec<Meeple<Follower>>,
    features: Features,
    events: EventQueue,
}

impl Session {
    /// Seats the players and fills every supply.
    pub fn new(config: &SessionConfig) -> Result<Self> {
        config.validate()?;

        let players: Vec<PlayerId> = (0..config.players).map(PlayerId).collect();
        let mut followers = Vec::with_capacity(players.len() * config.followers_per_player as usize);
        for &player in &players {
            for _ in 0..config.followers_per_player {
                let id = MeepleId(followers.len() as u16);
                followers.push(Meeple::new(id, player, Follower));
            }
        }
        debug!(
            "session started: {} players, {} followers each",
            config.players, config.followers_per_player
        );

        Ok(Session {
            players,
            active: 0,
            followers,
            features: Features::new(),
            events: EventQueue::new(),
        })
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn active_player(&self) -> PlayerId {
        self.players[self.active]
    }

    pub fn set_active_player(&mut self, player: PlayerId) -> Result<()> {
        let idx = self
            .players
            .iter()
            .position(|&p| p == player)
            .ok_or(MeepleError::UnknownPlayer(player))?;
        self.active = idx;
        Ok(())
    }

    /// Passes the turn to the next player in seat order and returns them.
    pub fn next_turn(&mut self) -> PlayerId {
        self.active = (self.active + 1) % self.players.len();
        self.active_player()
    }

    pub fn features(&self) -> &Features {
        &self.features
    }

    pub fn features_mut(&mut self) -> &mut Features {
        &mut self.features
    }

    pub fn meeple(&self, id: MeepleId) -> Option<&Meeple<Follower>> {
        self.followers.get(id.0 as usize)
    }

    pub fn meeples(&self) -> &[Meeple<Follower>] {
        &self.followers
    }

    /// Followers of `player` waiting in supply.
    pub fn supply(&self, player: PlayerId) -> impl Iterator<Item = &Meeple<Follower>> + '_ {
        self.followers
            .iter()
            .filter(move |m| m.owner() == player && m.is_in_supply())
    }

    pub fn supply_count(&self, player: PlayerId) -> usize {
        self.supply(player).count()
    }

    /// Places one of `player`'s followers from supply on the feature at
    /// `location` of `tile`. The feature must not be occupied yet.
    pub fn deploy_follower(&mut self, player: PlayerId, tile: &Tile, location: Location) -> Result<MeepleId> {
        if !self.players.contains(&player) {
            return Err(MeepleError::UnknownPlayer(player));
        }
        let active = self.active_player();
        let meeple = self
            .followers
            .iter_mut()
            .find(|m| m.owner() == player && m.is_in_supply())
            .ok_or(MeepleError::EmptySupply(player))?;

        let mut turn = Turn::new(active, &mut self.events);
        meeple.deploy_unoccupied(tile, location, &mut self.features, &mut turn)?;
        Ok(meeple.id())
    }

    /// Takes a deployed follower, and any companion it strands, back to
    /// supply.
    pub fn undeploy(&mut self, id: MeepleId) -> Result<()> {
        let active = self.active_player();
        let mut turn = Turn::new(active, &mut self.events);
        undeploy_with_companions(&mut self.followers, id, &mut self.features, &mut turn)
    }

    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Hands queued events to the caller in posting order.
    pub fn drain_events(&mut self) -> Vec<MeepleEvent> {
        self.events.drain().collect()
    }
}
