//! Events emitted by the simulation, drained into each tick's snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::{BuildingKind, PlayerId, UnitKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    UnitTrained { owner: PlayerId, kind: UnitKind },
    BuildingPlaced { owner: PlayerId, kind: BuildingKind },
    /// A resource node ran dry.
    NodeDepleted { node: u64 },
    UnitSlain { owner: PlayerId, kind: UnitKind },
}
