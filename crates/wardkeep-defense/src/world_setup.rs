//! Entity spawn factories for setting up the simulation world.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use wardkeep_core::components::{Body, Health, Weapon};
use wardkeep_core::types::{Arena, Position};

use crate::components::{Enemy, King, Projectile, Tower};
use crate::constants::*;
use crate::enums::{GameMode, ProjectileSource};

/// Tower positions pre-placed in endless mode, flanking the throne.
const ENDLESS_TOWERS: [(f32, f32); 4] = [(100.0, 200.0), (700.0, 200.0), (100.0, 400.0), (700.0, 400.0)];

/// Set up a fresh round: the king at the center, plus the endless-mode
/// starting towers. Day/night rounds begin with no towers; the player
/// builds them.
pub fn setup_round(world: &mut World, mode: GameMode, arena: &Arena) {
    spawn_king(world, arena.center());
    if mode == GameMode::Endless {
        for (x, y) in ENDLESS_TOWERS {
            spawn_tower(world, Position::new(x, y));
        }
    }
}

/// Spawn the king with full health and a ready weapon.
pub fn spawn_king(world: &mut World, at: Position) -> hecs::Entity {
    world.spawn((
        King,
        at,
        Body {
            radius: KING_RADIUS,
        },
        Health::full(KING_MAX_HEALTH),
        Weapon::ready(KING_SHOT_DELAY, KING_SHOT_DAMAGE),
    ))
}

pub fn spawn_tower(world: &mut World, at: Position) -> hecs::Entity {
    world.spawn((
        Tower { range: TOWER_RANGE },
        at,
        Weapon::ready(TOWER_SHOT_DELAY, TOWER_SHOT_DAMAGE),
    ))
}

/// Spawn one enemy at a random point on the left or right screen edge,
/// marching toward the king's position as of right now.
pub fn spawn_enemy(world: &mut World, rng: &mut ChaCha8Rng, arena: &Arena, king_pos: Position) -> hecs::Entity {
    let x = if rng.gen_bool(0.5) { 0.0 } else { arena.width };
    let y = rng.gen_range(ENEMY_SPAWN_MARGIN..arena.height - ENEMY_SPAWN_MARGIN);
    world.spawn((
        Enemy {
            target: king_pos,
            speed: ENEMY_SPEED,
            bounty: ENEMY_BOUNTY,
        },
        Position::new(x, y),
        Body {
            radius: ENEMY_RADIUS,
        },
        Health::full(ENEMY_MAX_HEALTH),
    ))
}

/// Spawn a projectile from `from` toward `toward` at the fixed
/// projectile speed. Returns `None` if the two points coincide.
pub fn spawn_projectile(
    world: &mut World,
    from: Position,
    toward: Position,
    damage: i32,
    source: ProjectileSource,
) -> Option<hecs::Entity> {
    let direction = from.direction_to(&toward)?;
    let radius = match source {
        ProjectileSource::King => KING_SHOT_RADIUS,
        _ => TOWER_SHOT_RADIUS,
    };
    Some(world.spawn((
        Projectile { damage, source },
        from,
        direction.scaled(PROJECTILE_SPEED),
        Body { radius },
    )))
}

/// Find the king. A round always has exactly one; `None` only occurs
/// on an empty world.
pub fn king_status(world: &World) -> Option<(hecs::Entity, Position, f32, i32)> {
    world
        .query::<(&King, &Position, &Body, &Health)>()
        .iter()
        .next()
        .map(|(entity, (_, pos, body, health))| (entity, *pos, body.radius, health.current))
}
