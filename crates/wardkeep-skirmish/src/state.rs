//! Game state snapshot — the complete visible state emitted each tick.
//!
//! Entity ids are opaque handles, stable for an entity's lifetime;
//! views are sorted by id so equal worlds serialize identically.

use serde::{Deserialize, Serialize};

use wardkeep_core::types::{Position, SimTime};

use crate::enums::{BuildingKind, OrderKind, PlayerId, Race, ResourceKind, UnitKind};
use crate::events::GameEvent;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub players: Vec<PlayerView>,
    pub units: Vec<UnitView>,
    pub buildings: Vec<BuildingView>,
    pub nodes: Vec<NodeView>,
    /// Ids of the human player's currently selected units.
    pub selection: Vec<u64>,
    /// Events that fired this tick.
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub race: Race,
    pub minerals: u32,
    pub gas: u32,
    pub supply_used: u32,
    pub supply_max: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub id: u64,
    pub owner: PlayerId,
    pub kind: UnitKind,
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
    pub order: OrderKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingView {
    pub id: u64,
    pub owner: PlayerId,
    pub kind: BuildingKind,
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeView {
    pub id: u64,
    pub kind: ResourceKind,
    pub position: Position,
    pub amount: u32,
    pub depleted: bool,
}
