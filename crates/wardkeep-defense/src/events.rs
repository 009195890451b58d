//! Events emitted by the simulation for UI and audio feedback.
//!
//! Drained into each tick's snapshot.

use serde::{Deserialize, Serialize};

use wardkeep_core::types::Position;

use crate::enums::RoundOutcome;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new endless-mode wave arrived.
    WaveSpawned { wave: u32, count: u32 },
    /// Build phase ended; the night's enemies spawned.
    NightFell { day: u32, count: u32 },
    /// Night cleared; gold paid out and the next build phase began.
    DayBroke { day: u32, payout: u32 },
    /// An enemy died to a projectile.
    EnemySlain { bounty: u32 },
    /// The king took damage.
    KingStruck { damage: i32, remaining: i32 },
    /// A tower was placed.
    TowerRaised { at: Position },
    /// The round ended.
    RoundEnded { outcome: RoundOutcome },
}
