//! ECS components shared by both game engines.
//!
//! Components are plain data structs with no behavior. Game logic lives
//! in systems, not components.

use serde::{Deserialize, Serialize};

/// Hit points. Death is handled by removal, never by displaying a
/// negative value: systems that apply damage treat `current <= 0` as
/// dead and despawn the entity in the same pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

/// Collision circle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub radius: f32,
}

/// Cooldown-gated attack. `cooldown` counts down one per tick and the
/// actor may fire only at zero, resetting it to `delay`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    pub cooldown: u32,
    pub delay: u32,
    pub damage: i32,
}

impl Health {
    /// Full health at the given maximum.
    pub fn full(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Fraction of health remaining, clamped to 0..=1 for display.
    pub fn ratio(&self) -> f32 {
        (self.current.max(0) as f32 / self.max as f32).min(1.0)
    }
}

impl Weapon {
    /// A weapon that is ready to fire immediately.
    pub fn ready(delay: u32, damage: i32) -> Self {
        Self {
            cooldown: 0,
            delay,
            damage,
        }
    }
}
