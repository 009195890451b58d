//! Enumeration types for the tower-defense engine.

use serde::{Deserialize, Serialize};

/// Which variant the engine is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Waves spawn on a fixed interval forever; the king shoots back.
    #[default]
    Endless,
    /// Alternating build/defend phases with a gold economy and a win day.
    DayNight,
}

/// Round state. `Endless` rounds only ever see `Defend` and `Defeat`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Timer counting down; towers may be placed.
    Build,
    /// Combat is live.
    #[default]
    Defend,
    /// King fell. Restart to try again.
    Defeat,
    /// Survived past the final day.
    Victory,
}

/// Who fired a projectile. Friendly projectiles are tested against
/// enemies; enemy projectiles only against the king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileSource {
    King,
    Tower,
    Enemy,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Defeat,
    Victory,
}

impl GamePhase {
    /// Whether the round has ended (either way).
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::Defeat | GamePhase::Victory)
    }
}
