//! Per-player economy and supply bookkeeping.

use serde::{Deserialize, Serialize};

use crate::constants::{STARTING_MINERALS, STARTING_SUPPLY_CAP};
use crate::enums::{PlayerId, Race};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,
    pub race: Race,
    pub minerals: u32,
    pub gas: u32,
    pub supply_used: u32,
    pub supply_max: u32,
}

impl PlayerState {
    pub fn new(id: PlayerId, race: Race) -> Self {
        Self {
            id,
            race,
            minerals: STARTING_MINERALS,
            gas: 0,
            supply_used: 0,
            supply_max: STARTING_SUPPLY_CAP,
        }
    }

    /// Whether `supply_cost` more supply fits under the cap.
    pub fn can_afford_supply(&self, supply_cost: u32) -> bool {
        self.supply_used + supply_cost <= self.supply_max
    }
}
