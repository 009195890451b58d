//! Cooldown bookkeeping and tower fire control.
//!
//! Every weapon cooldown decrements by one tick while positive. A tower
//! whose cooldown has reached zero picks the nearest enemy strictly
//! within range and fires a projectile at it, resetting its cooldown.
//! The king fires on player command only (see the engine), never here.

use hecs::{Entity, World};

use wardkeep_core::components::Weapon;
use wardkeep_core::types::Position;

use crate::components::{Enemy, Tower};
use crate::enums::ProjectileSource;
use crate::world_setup;

/// Run one combat tick: cooldowns, then tower target selection and fire.
pub fn run(world: &mut World) {
    for (_entity, weapon) in world.query_mut::<&mut Weapon>() {
        if weapon.cooldown > 0 {
            weapon.cooldown -= 1;
        }
    }

    // Snapshot enemy positions once; towers scan it in storage order.
    let enemies: Vec<(Entity, Position)> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (_, pos))| (entity, *pos))
        .collect();

    // Collect shots first, spawn after the query ends.
    let mut shots: Vec<(Position, Position, i32)> = Vec::new();
    for (_entity, (tower, pos, weapon)) in world.query_mut::<(&Tower, &Position, &mut Weapon)>() {
        if weapon.cooldown > 0 {
            continue;
        }
        if let Some(target) = nearest_in_range(pos, tower.range, &enemies) {
            shots.push((*pos, target, weapon.damage));
            weapon.cooldown = weapon.delay;
        }
    }

    for (from, toward, damage) in shots {
        world_setup::spawn_projectile(world, from, toward, damage, ProjectileSource::Tower);
    }
}

/// Nearest enemy strictly within `range` of `from`. Ties resolve to the
/// first candidate encountered in the scan; both comparisons are strict.
pub fn nearest_in_range(from: &Position, range: f32, enemies: &[(Entity, Position)]) -> Option<Position> {
    let mut best: Option<Position> = None;
    let mut best_dist = f32::INFINITY;
    for (_, enemy_pos) in enemies {
        let dist = from.distance_to(enemy_pos);
        if dist < range && dist < best_dist {
            best_dist = dist;
            best = Some(*enemy_pos);
        }
    }
    best
}
