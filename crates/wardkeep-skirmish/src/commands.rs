//! Human player commands.
//!
//! The platform layer translates raw mouse/keyboard events into these;
//! the engine queues them and applies them at the next tick boundary.
//! Invalid commands are no-ops.

use serde::{Deserialize, Serialize};

use wardkeep_core::types::Position;

use crate::enums::{BuildingKind, UnitKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Left button pressed: begin a drag and click-select the unit
    /// under the cursor, additively if a modifier is held.
    SelectPress { at: Position, additive: bool },
    /// Left button released: if the drag exceeded the threshold on
    /// both axes, rectangle-select all own units it covers.
    SelectRelease { at: Position, additive: bool },
    /// Right click: order every selected unit to the point — harvest
    /// for workers when a live node is near the click, move otherwise.
    CommandAt { at: Position },
    /// Send the first selected worker to build at a point.
    PlaceBuilding { kind: BuildingKind, at: Position },
    /// Train a unit from the first own building capable of it.
    Train { kind: UnitKind },
}
