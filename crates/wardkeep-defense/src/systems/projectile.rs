//! Projectile flight and impact.
//!
//! Each projectile advances by its velocity, then is tested against
//! every live target for circle-circle overlap. The first overlap
//! consumes the projectile; a projectile that leaves the playfield is
//! likewise removed. Projectiles are processed one at a time against
//! the live world, so a kill is visible to the next projectile within
//! the same tick and nothing is ever hit twice.

use hecs::{Entity, World};

use wardkeep_core::components::{Body, Health};
use wardkeep_core::types::{Arena, Position, Velocity};

use crate::components::{Enemy, Projectile};
use crate::enums::ProjectileSource;
use crate::events::GameEvent;
use crate::systems::director::Economy;
use crate::world_setup;

pub fn run(world: &mut World, arena: &Arena, economy: &mut Economy, events: &mut Vec<GameEvent>) {
    let projectiles: Vec<Entity> = world
        .query::<&Projectile>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    for entity in projectiles {
        let (pos, radius, damage, source) = match advance(world, entity) {
            Some(state) => state,
            None => continue,
        };

        let consumed = match source {
            ProjectileSource::King | ProjectileSource::Tower => {
                strike_enemy(world, &pos, radius, damage, economy, events)
            }
            ProjectileSource::Enemy => strike_king(world, &pos, radius, damage, events),
        };

        if consumed || !arena.contains(&pos) {
            let _ = world.despawn(entity);
        }
    }
}

/// Move one projectile by its velocity; returns its post-move state.
fn advance(world: &mut World, entity: Entity) -> Option<(Position, f32, i32, ProjectileSource)> {
    let velocity = *world.get::<&Velocity>(entity).ok()?;
    let mut pos = world.get::<&mut Position>(entity).ok()?;
    pos.x += velocity.x;
    pos.y += velocity.y;
    let pos = *pos;
    let radius = world.get::<&Body>(entity).ok()?.radius;
    let projectile = world.get::<&Projectile>(entity).ok()?;
    Some((pos, radius, projectile.damage, projectile.source))
}

/// Test a friendly projectile against every live enemy in scan order.
/// Returns true if the projectile hit (and is consumed).
fn strike_enemy(
    world: &mut World,
    pos: &Position,
    radius: f32,
    damage: i32,
    economy: &mut Economy,
    events: &mut Vec<GameEvent>,
) -> bool {
    let mut hit: Option<Entity> = None;
    for (entity, (_, enemy_pos, body)) in world.query::<(&Enemy, &Position, &Body)>().iter() {
        if pos.distance_to(enemy_pos) < radius + body.radius {
            hit = Some(entity);
            break;
        }
    }

    let Some(enemy_entity) = hit else {
        return false;
    };

    let dead = match world.get::<&mut Health>(enemy_entity) {
        Ok(mut health) => {
            health.current -= damage;
            health.current <= 0
        }
        Err(_) => false,
    };
    if dead {
        if let Ok(enemy) = world.get::<&Enemy>(enemy_entity) {
            economy.record_kill(enemy.bounty);
            events.push(GameEvent::EnemySlain {
                bounty: enemy.bounty,
            });
        }
        let _ = world.despawn(enemy_entity);
    }
    true
}

/// Test an enemy projectile against the king.
fn strike_king(
    world: &mut World,
    pos: &Position,
    radius: f32,
    damage: i32,
    events: &mut Vec<GameEvent>,
) -> bool {
    let Some((king_entity, king_pos, king_radius, _)) = world_setup::king_status(world) else {
        return false;
    };
    if pos.distance_to(&king_pos) >= radius + king_radius {
        return false;
    }
    if let Ok(mut health) = world.get::<&mut Health>(king_entity) {
        health.current -= damage;
        events.push(GameEvent::KingStruck {
            damage,
            remaining: health.current,
        });
    }
    true
}
