//! Game state snapshot — the complete visible state emitted each tick.

use serde::{Deserialize, Serialize};

use wardkeep_core::types::{Position, SimTime};

use crate::enums::{GameMode, GamePhase, ProjectileSource};
use crate::events::GameEvent;

/// Complete game state broadcast to the platform layer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub mode: GameMode,
    pub phase: GamePhase,
    /// Current wave index (endless variant).
    pub wave: u32,
    /// Current day index (day/night variant).
    pub day: u32,
    pub gold: u32,
    /// Ticks left in the current build phase, zero otherwise.
    pub build_ticks_remaining: u32,
    pub king: KingView,
    pub towers: Vec<TowerView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    /// Events that fired this tick.
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KingView {
    pub position: Position,
    pub radius: f32,
    pub health: i32,
    pub max_health: i32,
    pub cooldown: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub position: Position,
    pub range: f32,
    pub cooldown: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    pub radius: f32,
    pub health: i32,
    pub max_health: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub radius: f32,
    pub source: ProjectileSource,
}
