//! Engine configuration.

use serde::{Deserialize, Serialize};

use wardkeep_core::types::Arena;

use crate::constants::*;
use crate::enums::{GameMode, GamePhase};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub mode: GameMode,
    pub arena: Arena,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            mode: GameMode::Endless,
            arena: Arena::new(ARENA_WIDTH, ARENA_HEIGHT),
        }
    }
}

impl SimConfig {
    pub fn endless(seed: u64) -> Self {
        Self {
            seed,
            mode: GameMode::Endless,
            ..Self::default()
        }
    }

    pub fn day_night(seed: u64) -> Self {
        Self {
            seed,
            mode: GameMode::DayNight,
            ..Self::default()
        }
    }
}

/// Per-variant tuning. Both games run the same combat core; this is
/// the whole difference between them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ruleset {
    pub mode: GameMode,
    /// Damage dealt by an enemy reaching the king.
    pub contact_damage: i32,
    /// Enemies per wave/day index.
    pub spawn_per_cycle: u32,
    pub starting_gold: u32,
    /// Phase a fresh round opens in.
    pub opening_phase: GamePhase,
}

impl Ruleset {
    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Endless => Self {
                mode,
                contact_damage: CONTACT_DAMAGE_ENDLESS,
                spawn_per_cycle: ENEMIES_PER_WAVE,
                starting_gold: 0,
                opening_phase: GamePhase::Defend,
            },
            GameMode::DayNight => Self {
                mode,
                contact_damage: CONTACT_DAMAGE_DAY_NIGHT,
                spawn_per_cycle: ENEMIES_PER_DAY,
                starting_gold: STARTING_GOLD,
                opening_phase: GamePhase::Build,
            },
        }
    }
}
