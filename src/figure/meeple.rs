//! The meeple entity and its deployment protocol.
//!
//! A meeple is in exactly one of three states:
//!
//! - in supply: no position, location or feature;
//! - deployed: position, location and feature all set, location not `Prison`;
//! - imprisoned: location is `Prison`, no feature.
//!
//! `deploy` and `undeploy` keep the feature's occupancy list in step with the
//! meeple and post one `MeepleEvent` per transition. The feature is always
//! updated before the event is posted, so observers see a consistent board.

use std::fmt;
use std::hash::{Hash, Hasher};

use log::{debug, error, trace, warn};
use serde::{Deserialize, Serialize};

use super::rules::{DeploymentCheck, DeploymentRules};
use crate::board::{Feature, FeatureId, FeaturePointer, Features, Location, Position, Tile};
use crate::error::{MeepleError, Result};
use crate::event::MeepleEvent;
use crate::game::GameContext;
use crate::player::PlayerId;

/// Stable identity of a meeple within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MeepleId(pub u16);

impl fmt::Display for MeepleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Deployment state derived from a meeple's location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeepleState {
    InSupply,
    Deployed,
    Imprisoned,
}

impl fmt::Display for MeepleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MeepleState::InSupply => "in supply",
            MeepleState::Deployed => "deployed",
            MeepleState::Imprisoned => "imprisoned",
        })
    }
}

/// A player-owned piece. `R` is the variant and supplies the eligibility
/// rules.
///
/// Equality compares the variant, owner, `index` and location. Position and
/// feature are left out: a feature may be merged into another over the game
/// while the meeple's placement stays the same.
#[derive(Debug, Clone)]
pub struct Meeple<R> {
    id: MeepleId,
    owner: PlayerId,
    rules: R,
    position: Option<Position>,
    location: Option<Location>,
    feature: Option<FeatureId>,
    /// Distinguishes meeples sharing one feature at the same location.
    index: Option<u8>,
}

impl<R> Meeple<R> {
    /// Creates a meeple in supply.
    pub fn new(id: MeepleId, owner: PlayerId, rules: R) -> Self {
        Meeple {
            id,
            owner,
            rules,
            position: None,
            location: None,
            feature: None,
            index: None,
        }
    }

    pub fn id(&self) -> MeepleId {
        self.id
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn feature(&self) -> Option<FeatureId> {
        self.feature
    }

    pub fn index(&self) -> Option<u8> {
        self.index
    }

    pub fn set_index(&mut self, index: Option<u8>) {
        self.index = index;
    }

    pub fn state(&self) -> MeepleState {
        match self.location {
            None => MeepleState::InSupply,
            Some(Location::Prison) => MeepleState::Imprisoned,
            Some(_) => MeepleState::Deployed,
        }
    }

    /// True if the meeple stands on the board.
    pub fn is_deployed(&self) -> bool {
        matches!(self.location, Some(loc) if !loc.is_prison())
    }

    pub fn is_in_supply(&self) -> bool {
        self.location.is_none()
    }

    pub fn is_imprisoned(&self) -> bool {
        self.location == Some(Location::Prison)
    }

    /// Where the meeple stands, if it is deployed.
    pub fn pointer(&self) -> Option<FeaturePointer> {
        match (self.position, self.location) {
            (Some(position), Some(location)) if !location.is_prison() => {
                Some(FeaturePointer::new(position, location))
            }
            _ => None,
        }
    }

    /// Resets position, location and feature. The feature is not notified
    /// and no event is posted.
    pub fn clear_deployment(&mut self) {
        self.position = None;
        self.location = None;
        self.feature = None;
    }

    fn contract_violation(&self, operation: &'static str) -> MeepleError {
        let err = MeepleError::InvalidStateTransition {
            meeple: self.id,
            operation,
            state: self.state(),
        };
        error!("{}", err);
        err
    }
}

impl<R: DeploymentRules> Meeple<R> {
    pub fn is_deployment_allowed(&self, feature: &Feature) -> DeploymentCheck {
        self.rules.is_deployment_allowed(self, feature)
    }

    pub fn deployment_feature(&self, tile: &Tile, location: Location) -> Option<FeatureId> {
        self.rules.deployment_feature(tile, location)
    }

    pub fn can_be_eaten_by_dragon(&self) -> bool {
        self.rules.can_be_eaten_by_dragon()
    }

    fn resolve_feature(&self, tile: &Tile, location: Location) -> Result<FeatureId> {
        self.deployment_feature(tile, location)
            .ok_or_else(|| MeepleError::NoFeature(FeaturePointer::new(tile.position(), location)))
    }

    /// Places the meeple on the feature `tile` has at `location`.
    pub fn deploy<G: GameContext>(
        &mut self,
        tile: &Tile,
        location: Location,
        features: &mut Features,
        game: &mut G,
    ) -> Result<()> {
        let feature = self.resolve_feature(tile, location)?;
        self.deploy_on(tile, location, feature, features, game)
    }

    /// Like `deploy`, but refuses a feature that already holds any meeple.
    /// Only followers claiming a feature go through this check.
    pub fn deploy_unoccupied<G: GameContext>(
        &mut self,
        tile: &Tile,
        location: Location,
        features: &mut Features,
        game: &mut G,
    ) -> Result<()> {
        let feature_id = self.resolve_feature(tile, location)?;
        let feature = features
            .get(feature_id)
            .ok_or(MeepleError::UnknownFeature(feature_id))?;
        if feature.is_occupied() {
            warn!(
                "{} cannot claim {}: feature is already occupied",
                self,
                FeaturePointer::new(tile.position(), location)
            );
            return Err(MeepleError::InvalidDeployment(
                "feature is already occupied".to_string(),
            ));
        }
        self.deploy_on(tile, location, feature_id, features, game)
    }

    /// Places the meeple on an already resolved feature.
    ///
    /// Fails before mutating anything when the meeple is not in supply, the
    /// target is the prison, the feature is unknown, or the variant rejects
    /// the feature.
    pub fn deploy_on<G: GameContext>(
        &mut self,
        tile: &Tile,
        location: Location,
        feature_id: FeatureId,
        features: &mut Features,
        game: &mut G,
    ) -> Result<()> {
        if !self.is_in_supply() {
            return Err(self.contract_violation("deploy"));
        }
        if location.is_prison() {
            return Err(MeepleError::InvalidDeployment(
                "the prison is not a board location".to_string(),
            ));
        }
        let feature = features
            .get_mut(feature_id)
            .ok_or(MeepleError::UnknownFeature(feature_id))?;

        if let DeploymentCheck::Rejected(reason) = self.is_deployment_allowed(feature) {
            warn!("{} rejected on {:?}: {}", self, feature_id, reason);
            return Err(MeepleError::InvalidDeployment(reason));
        }

        feature.add_meeple(self.id);
        let destination = FeaturePointer::new(tile.position(), location);
        self.position = Some(destination.position);
        self.location = Some(location);
        self.feature = Some(feature_id);
        debug!("{} deployed on {:?}", self, feature_id);

        let player = game.active_player();
        game.post(MeepleEvent::deployed(player, &*self, destination));
        Ok(())
    }

    /// Returns the meeple to supply, checking companion pieces left behind.
    /// Yields the companions the variant reports as stranded; the caller
    /// undeploys them (see `game::undeploy_with_companions`).
    pub fn undeploy<G: GameContext>(
        &mut self,
        features: &mut Features,
        game: &mut G,
    ) -> Result<Vec<MeepleId>> {
        self.undeploy_with(true, features, game)
    }

    /// Returns the meeple to supply. `check_companions` is handed to the
    /// variant's `on_undeployed` hook.
    ///
    /// Calling this on a meeple that is not deployed is a caller bug and
    /// yields `InvalidStateTransition` without touching anything.
    pub fn undeploy_with<G: GameContext>(
        &mut self,
        check_companions: bool,
        features: &mut Features,
        game: &mut G,
    ) -> Result<Vec<MeepleId>> {
        let (source, feature_id) = match (self.pointer(), self.feature) {
            (Some(source), Some(feature_id)) => (source, feature_id),
            _ => return Err(self.contract_violation("undeploy")),
        };
        let feature = features
            .get_mut(feature_id)
            .ok_or(MeepleError::UnknownFeature(feature_id))?;

        feature.remove_meeple(self.id);
        self.clear_deployment();
        debug!("{} left {}", self, source);

        let player = game.active_player();
        game.post(MeepleEvent::undeployed(player, &*self, source));

        trace!("{} on_undeployed(check_companions = {})", self, check_companions);
        let stranded = self
            .rules
            .on_undeployed(&*self, source, check_companions, feature);
        if !stranded.is_empty() {
            debug!("{} stranded companions {:?}", self, stranded);
        }
        Ok(stranded)
    }

    /// Moves a meeple from supply into the prison.
    pub fn imprison(&mut self) -> Result<()> {
        if !self.is_in_supply() {
            return Err(self.contract_violation("imprison"));
        }
        self.location = Some(Location::Prison);
        debug!("{} imprisoned", self);
        Ok(())
    }

    /// Returns an imprisoned meeple to supply.
    pub fn release(&mut self) -> Result<()> {
        if !self.is_imprisoned() {
            return Err(self.contract_violation("release"));
        }
        self.clear_deployment();
        debug!("{} released", self);
        Ok(())
    }
}

impl<R: PartialEq> PartialEq for Meeple<R> {
    fn eq(&self, other: &Self) -> bool {
        self.rules == other.rules
            && self.owner == other.owner
            && self.index == other.index
            && self.location == other.location
    }
}

impl<R: Eq> Eq for Meeple<R> {}

impl<R> Hash for Meeple<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.location.hash(state);
    }
}

impl<R: DeploymentRules> fmt::Display for Meeple<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}({}", self.rules.name(), self.id, self.owner)?;
        if self.is_imprisoned() {
            f.write_str(", prison")?;
        }
        f.write_str(")")?;
        if let Some(pointer) = self.pointer() {
            write!(f, " @ {}", pointer)?;
        }
        Ok(())
    }
}
