//! Enumeration types for the skirmish engine.

use serde::{Deserialize, Serialize};

/// The two sides of a match. `One` is the human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Race {
    Terran,
    Zerg,
    Protoss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitKind {
    Worker,
    Marine,
    Zergling,
    Probe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildingKind {
    CommandCenter,
    SupplyDepot,
    Barracks,
    Hatchery,
    Nexus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Minerals,
    Gas,
}

/// Order discriminant for snapshots; the full order (with targets)
/// lives in the `Order` component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderKind {
    Idle,
    Move,
    Harvest,
    Build,
    Attack,
}

impl PlayerId {
    pub fn index(&self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn opponent(&self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

impl Race {
    /// The race's basic melee unit, what the opponent trains.
    pub fn basic_melee(&self) -> UnitKind {
        match self {
            Race::Zerg => UnitKind::Zergling,
            _ => UnitKind::Marine,
        }
    }
}

impl UnitKind {
    /// Worker-typed units may harvest and build.
    pub fn is_worker(&self) -> bool {
        matches!(self, UnitKind::Worker | UnitKind::Probe)
    }
}
