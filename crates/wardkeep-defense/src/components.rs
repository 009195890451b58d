//! ECS components specific to the tower-defense games.
//!
//! Shared combat components (`Health`, `Body`, `Weapon`) come from
//! wardkeep-core; these are the per-type data bags.

use serde::{Deserialize, Serialize};

use wardkeep_core::types::Position;

use crate::enums::ProjectileSource;

/// Marks the single defended king.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct King;

/// A stationary tower. Fires at the nearest enemy in range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tower {
    pub range: f32,
}

/// An attacker marching on the throne.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// The king's position captured at spawn time. Enemies march toward
    /// this point, not toward the king's live position.
    pub target: Position,
    pub speed: f32,
    /// Gold credited on kill.
    pub bounty: u32,
}

/// A projectile in flight. Position and velocity are separate
/// components; this carries the payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub damage: i32,
    pub source: ProjectileSource,
}
