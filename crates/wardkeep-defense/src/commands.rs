//! Player commands sent from the platform layer to the engine.
//!
//! Commands are queued and processed at the next tick boundary.
//! Invalid commands (shooting during a build phase, placing a tower
//! without gold, restarting mid-round) are no-ops, not errors.

use serde::{Deserialize, Serialize};

use wardkeep_core::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Fire the king's weapon toward a point. Honored only in a combat
    /// phase and only when the king's cooldown has elapsed.
    Shoot { target: Position },
    /// Spend gold to raise a tower. Honored only during a build phase,
    /// with enough gold, at a point inside the playfield.
    PlaceTower { at: Position },
    /// Reset everything to a fresh round. Honored only after the round
    /// has ended.
    Restart,
}
