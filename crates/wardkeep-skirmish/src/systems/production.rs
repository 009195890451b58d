//! Training and construction: building capabilities, the train
//! operation, and worker Build orders.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use wardkeep_core::types::Position;

use crate::components::{Building, Order, Owner, Unit};
use crate::constants::{BUILD_RANGE, TRAIN_SPAWN_JITTER, UNIT_COST};
use crate::enums::{BuildingKind, UnitKind};
use crate::events::GameEvent;
use crate::player::PlayerState;
use crate::world_setup;

/// Which buildings can train which units.
pub fn can_train(building: BuildingKind, unit: UnitKind) -> bool {
    matches!(
        (building, unit),
        (BuildingKind::CommandCenter, UnitKind::Worker)
            | (BuildingKind::Barracks, UnitKind::Marine)
            | (BuildingKind::Hatchery, UnitKind::Zergling)
            | (BuildingKind::Nexus, UnitKind::Probe)
    )
}

/// Mineral cost of a building.
pub fn building_cost(kind: BuildingKind) -> u32 {
    match kind {
        BuildingKind::CommandCenter => 400,
        BuildingKind::SupplyDepot => 100,
        BuildingKind::Barracks => 150,
        BuildingKind::Hatchery => 300,
        BuildingKind::Nexus => 400,
    }
}

/// Train `kind` at `building`: capability and affordability checks,
/// debit, then spawn next to the building with a small random offset.
/// Returns the new unit, or `None` if the operation was rejected.
pub fn train_unit(
    world: &mut World,
    player: &mut PlayerState,
    building: Entity,
    kind: UnitKind,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) -> Option<Entity> {
    let (building_kind, owner, at) = {
        let building_kind = world.get::<&Building>(building).ok()?.kind;
        let owner = world.get::<&Owner>(building).ok()?.0;
        let at = *world.get::<&Position>(building).ok()?;
        (building_kind, owner, at)
    };
    if !can_train(building_kind, kind) || player.minerals < UNIT_COST {
        return None;
    }

    player.minerals -= UNIT_COST;
    let spawn_at = Position::new(
        at.x + rng.gen_range(-TRAIN_SPAWN_JITTER..=TRAIN_SPAWN_JITTER),
        at.y + rng.gen_range(-TRAIN_SPAWN_JITTER..=TRAIN_SPAWN_JITTER),
    );
    let unit = world_setup::spawn_unit(world, kind, owner, spawn_at);
    player.supply_used += 1;
    events.push(GameEvent::UnitTrained { owner, kind });
    Some(unit)
}

/// Carry out Build orders: walk the worker to the site, then place the
/// building if the owner can pay. Either way the worker goes idle at
/// the site.
pub fn construction(world: &mut World, players: &mut [PlayerState; 2], events: &mut Vec<GameEvent>) {
    let builders: Vec<(Entity, BuildingKind, Position, f32)> = world
        .query::<(&Unit, &Order)>()
        .iter()
        .filter_map(|(entity, (unit, order))| match order {
            Order::Build { kind, site } => Some((entity, *kind, *site, unit.speed)),
            _ => None,
        })
        .collect();

    for (worker, kind, site, speed) in builders {
        let (near, owner) = {
            let pos = match world.get::<&Position>(worker) {
                Ok(pos) => *pos,
                Err(_) => continue,
            };
            let owner = match world.get::<&Owner>(worker) {
                Ok(owner) => owner.0,
                Err(_) => continue,
            };
            (pos.distance_to(&site) <= BUILD_RANGE, owner)
        };

        if !near {
            if let Ok(mut pos) = world.get::<&mut Position>(worker) {
                pos.step_toward(&site, speed);
            }
            continue;
        }

        let cost = building_cost(kind);
        let player = &mut players[owner.index()];
        if player.minerals >= cost {
            player.minerals -= cost;
            world_setup::spawn_building(world, kind, owner, site);
            events.push(GameEvent::BuildingPlaced { owner, kind });
        }
        if let Ok(mut order) = world.get::<&mut Order>(worker) {
            *order = Order::Idle;
        }
    }
}
