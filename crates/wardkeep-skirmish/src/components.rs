//! ECS components specific to the skirmish game.
//!
//! Shared combat components (`Health`, `Body`) come from wardkeep-core.

use hecs::Entity;
use serde::{Deserialize, Serialize};

use wardkeep_core::types::Position;

use crate::enums::{BuildingKind, PlayerId, ResourceKind, UnitKind};

/// A mobile unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Unit {
    pub kind: UnitKind,
    pub speed: f32,
}

/// A stationary structure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Building {
    pub kind: BuildingKind,
}

/// A harvestable resource node. Depleted nodes stay in the world but
/// are ignored by everything.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResourceNode {
    pub kind: ResourceKind,
    pub amount: u32,
    pub depleted: bool,
}

/// Which player owns this entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner(pub PlayerId);

/// A unit's current directive. Exactly one per unit; issuing a new
/// order replaces the old one.
#[derive(Debug, Clone, Copy, Default)]
pub enum Order {
    #[default]
    Idle,
    Move {
        dest: Position,
    },
    Harvest {
        node: Entity,
    },
    Build {
        kind: BuildingKind,
        site: Position,
    },
    Attack {
        target: Entity,
    },
}

impl Order {
    pub fn kind(&self) -> crate::enums::OrderKind {
        use crate::enums::OrderKind;
        match self {
            Order::Idle => OrderKind::Idle,
            Order::Move { .. } => OrderKind::Move,
            Order::Harvest { .. } => OrderKind::Harvest,
            Order::Build { .. } => OrderKind::Build,
            Order::Attack { .. } => OrderKind::Attack,
        }
    }
}
