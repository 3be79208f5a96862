//! End-to-end checks of the deploy/undeploy protocol through the public API.
//!
//! Builds a small board by hand, drives meeples through their transitions,
//! and inspects the feature registry and the captured event queue.

use meeple::board::{Feature, FeatureId, FeatureKind, FeaturePointer, Features, Location, Position, Tile};
use meeple::{
    undeploy_with_companions, DeploymentCheck, DeploymentRules, EventQueue, Follower, Meeple,
    MeepleError, MeepleEventKind, MeepleId, PlayerId, Turn,
};

/// A variant that only fits on roads.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Wayfarer;

impl DeploymentRules for Wayfarer {
    fn name(&self) -> &'static str {
        "Wayfarer"
    }

    fn is_deployment_allowed(&self, _meeple: &Meeple<Self>, feature: &Feature) -> DeploymentCheck {
        match feature.kind() {
            FeatureKind::Road => DeploymentCheck::Allowed,
            _ => DeploymentCheck::rejected("wayfarers stay on roads"),
        }
    }

    fn can_be_eaten_by_dragon(&self) -> bool {
        false
    }
}

fn board() -> (Features, Tile, FeatureId, FeatureId) {
    let mut features = Features::new();
    let f1 = features.insert(FeatureKind::City);
    let road = features.insert(FeatureKind::Road);
    let tile = Tile::new(Position::new(3, 4))
        .with_feature(Location::North, f1)
        .with_feature(Location::East, road)
        .with_feature(Location::West, road);
    (features, tile, f1, road)
}

#[test]
fn follower_round_trip_posts_one_event_per_transition() {
    let (mut features, tile, f1, _) = board();
    let mut events = EventQueue::new();
    let player = PlayerId(0);
    let mut follower = Meeple::new(MeepleId(0), player, Follower);
    let pointer = FeaturePointer::new(Position::new(3, 4), Location::North);

    {
        let mut turn = Turn::new(player, &mut events);
        follower.deploy(&tile, Location::North, &mut features, &mut turn).unwrap();
    }
    let posted: Vec<_> = events.drain().collect();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].player(), player);
    assert_eq!(posted[0].meeple(), MeepleId(0));
    assert_eq!(posted[0].source(), None);
    assert_eq!(posted[0].destination(), Some(pointer));
    assert_eq!(features.get(f1).unwrap().meeples(), &[MeepleId(0)]);

    {
        let mut turn = Turn::new(player, &mut events);
        follower.undeploy(&mut features, &mut turn).unwrap();
    }
    let posted: Vec<_> = events.drain().collect();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].player(), player);
    assert_eq!(posted[0].source(), Some(pointer));
    assert_eq!(posted[0].destination(), None);
    assert!(features.get(f1).unwrap().meeples().is_empty());
}

#[test]
fn deploy_binds_the_tile_feature_both_ways() {
    let (mut features, tile, _, road) = board();
    let mut events = EventQueue::new();
    let mut turn = Turn::new(PlayerId(1), &mut events);
    let mut m = Meeple::new(MeepleId(4), PlayerId(1), Follower);

    m.deploy(&tile, Location::East, &mut features, &mut turn).unwrap();
    assert_eq!(m.feature(), tile.feature(Location::East));
    assert_eq!(m.feature(), Some(road));
    assert!(features.get(road).unwrap().contains(m.id()));
}

#[test]
fn undeploy_restores_pre_deploy_equality() {
    let (mut features, tile, _, _) = board();
    let mut events = EventQueue::new();
    let mut turn = Turn::new(PlayerId(0), &mut events);
    let mut m = Meeple::new(MeepleId(0), PlayerId(0), Follower);
    let before = m.clone();

    m.deploy(&tile, Location::West, &mut features, &mut turn).unwrap();
    assert_ne!(m, before);
    m.undeploy(&mut features, &mut turn).unwrap();
    assert_eq!(m, before);
    assert_eq!(m.position(), None);
    assert_eq!(m.location(), None);
    assert_eq!(m.feature(), None);
}

#[test]
fn variant_rejection_has_no_side_effects() {
    let (mut features, tile, f1, road) = board();
    let mut events = EventQueue::new();
    let mut turn = Turn::new(PlayerId(0), &mut events);
    let mut w = Meeple::new(MeepleId(0), PlayerId(0), Wayfarer);

    assert!(!w.is_deployment_allowed(features.get(f1).unwrap()).is_allowed());
    let err = w.deploy(&tile, Location::North, &mut features, &mut turn).unwrap_err();
    match err {
        MeepleError::InvalidDeployment(reason) => assert_eq!(reason, "wayfarers stay on roads"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(w.is_in_supply());
    assert!(!features.get(f1).unwrap().is_occupied());

    w.deploy(&tile, Location::East, &mut features, &mut turn).unwrap();
    assert_eq!(w.feature(), Some(road));
    assert!(!w.can_be_eaten_by_dragon());
    drop(turn);
    assert_eq!(events.len(), 1);
}

#[test]
fn undeploy_from_supply_posts_nothing() {
    let (mut features, _, _, _) = board();
    let mut events = EventQueue::new();
    let mut turn = Turn::new(PlayerId(0), &mut events);
    let mut m = Meeple::new(MeepleId(0), PlayerId(0), Follower);

    let err = m.undeploy(&mut features, &mut turn).unwrap_err();
    assert!(matches!(err, MeepleError::InvalidStateTransition { .. }));
    assert!(err.to_string().contains("undeploy"));
    drop(turn);
    assert!(events.is_empty());
}

#[test]
fn co_located_meeples_are_told_apart_by_index() {
    let (mut features, tile, f1, _) = board();
    let mut events = EventQueue::new();
    let mut turn = Turn::new(PlayerId(0), &mut events);
    let mut a = Meeple::new(MeepleId(0), PlayerId(0), Follower);
    let mut b = Meeple::new(MeepleId(1), PlayerId(0), Follower);

    a.deploy(&tile, Location::North, &mut features, &mut turn).unwrap();
    b.deploy(&tile, Location::North, &mut features, &mut turn).unwrap();
    assert_eq!(a, b);

    a.set_index(Some(0));
    b.set_index(Some(1));
    assert_ne!(a, b);
    assert_eq!(features.get(f1).unwrap().meeples().len(), 2);

    a.undeploy(&mut features, &mut turn).unwrap();
    assert_eq!(features.get(f1).unwrap().meeples(), &[MeepleId(1)]);
    drop(turn);
    let kinds: Vec<_> = events.iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            MeepleEventKind::Deployed,
            MeepleEventKind::Deployed,
            MeepleEventKind::Undeployed
        ]
    );
}

/// A follower that drags any builder sharing its feature off with it.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Crew {
    Follower,
    Builder,
}

impl DeploymentRules for Crew {
    fn name(&self) -> &'static str {
        match self {
            Crew::Follower => "Follower",
            Crew::Builder => "Builder",
        }
    }

    fn on_undeployed(
        &self,
        _meeple: &Meeple<Self>,
        _source: FeaturePointer,
        check_companions: bool,
        vacated: &Feature,
    ) -> Vec<MeepleId> {
        match self {
            Crew::Follower if check_companions => vacated.meeples().to_vec(),
            _ => Vec::new(),
        }
    }
}

#[test]
fn stranded_builder_leaves_with_its_follower() {
    let (mut features, tile, _, road) = board();
    let mut events = EventQueue::new();
    let mut crew = vec![
        Meeple::new(MeepleId(0), PlayerId(0), Crew::Follower),
        Meeple::new(MeepleId(1), PlayerId(0), Crew::Builder),
    ];
    let mut turn = Turn::new(PlayerId(0), &mut events);
    for m in crew.iter_mut() {
        m.deploy(&tile, Location::East, &mut features, &mut turn).unwrap();
    }

    undeploy_with_companions(&mut crew, MeepleId(0), &mut features, &mut turn).unwrap();
    drop(turn);

    assert!(crew.iter().all(|m| m.is_in_supply()));
    assert!(!features.get(road).unwrap().is_occupied());
    let removed: Vec<_> = events
        .iter()
        .filter(|e| e.kind() == MeepleEventKind::Undeployed)
        .map(|e| e.meeple())
        .collect();
    assert_eq!(removed, vec![MeepleId(0), MeepleId(1)]);
}

#[test]
fn unchecked_undeploy_leaves_the_builder() {
    let (mut features, tile, _, road) = board();
    let mut events = EventQueue::new();
    let mut turn = Turn::new(PlayerId(0), &mut events);
    let mut follower = Meeple::new(MeepleId(0), PlayerId(0), Crew::Follower);
    let mut builder = Meeple::new(MeepleId(1), PlayerId(0), Crew::Builder);
    follower.deploy(&tile, Location::East, &mut features, &mut turn).unwrap();
    builder.deploy(&tile, Location::West, &mut features, &mut turn).unwrap();

    let stranded = follower.undeploy(&mut features, &mut turn).unwrap();
    assert_eq!(stranded, vec![MeepleId(1)]);
    follower.deploy(&tile, Location::East, &mut features, &mut turn).unwrap();

    let stranded = follower.undeploy_with(false, &mut features, &mut turn).unwrap();
    assert!(stranded.is_empty());
    assert!(builder.is_deployed());
    assert_eq!(features.get(road).unwrap().meeples(), &[MeepleId(1)]);
}
