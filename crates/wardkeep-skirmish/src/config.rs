//! Engine configuration.

use wardkeep_core::types::Arena;

use crate::constants::{ARENA_HEIGHT, ARENA_WIDTH};

/// Configuration for starting a new match.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same match.
    pub seed: u64,
    pub arena: Arena,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena: Arena::new(ARENA_WIDTH, ARENA_HEIGHT),
        }
    }
}

impl SimConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}
