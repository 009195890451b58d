//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot. Read-only — it never modifies the world.

use hecs::World;

use wardkeep_core::components::{Body, Health, Weapon};
use wardkeep_core::types::{Position, SimTime};

use crate::components::{Enemy, King, Projectile, Tower};
use crate::enums::{GameMode, GamePhase};
use crate::events::GameEvent;
use crate::state::*;
use crate::systems::director::{Director, Economy};

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    mode: GameMode,
    phase: GamePhase,
    director: &Director,
    economy: &Economy,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        mode,
        phase,
        wave: director.wave,
        day: director.day,
        gold: economy.gold,
        build_ticks_remaining: if phase == GamePhase::Build {
            director.build_ticks
        } else {
            0
        },
        king: build_king(world),
        towers: build_towers(world),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        events,
    }
}

fn build_king(world: &World) -> KingView {
    world
        .query::<(&King, &Position, &Body, &Health, &Weapon)>()
        .iter()
        .next()
        .map(|(_, (_, pos, body, health, weapon))| KingView {
            position: *pos,
            radius: body.radius,
            health: health.current,
            max_health: health.max,
            cooldown: weapon.cooldown,
        })
        .unwrap_or_default()
}

fn build_towers(world: &World) -> Vec<TowerView> {
    world
        .query::<(&Tower, &Position, &Weapon)>()
        .iter()
        .map(|(_, (tower, pos, weapon))| TowerView {
            position: *pos,
            range: tower.range,
            cooldown: weapon.cooldown,
        })
        .collect()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Enemy, &Position, &Body, &Health)>()
        .iter()
        .map(|(_, (_, pos, body, health))| EnemyView {
            position: *pos,
            radius: body.radius,
            health: health.current,
            max_health: health.max,
        })
        .collect()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position, &Body)>()
        .iter()
        .map(|(_, (projectile, pos, body))| ProjectileView {
            position: *pos,
            radius: body.radius,
            source: projectile.source,
        })
        .collect()
}
