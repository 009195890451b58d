//! Entity spawn factories for setting up a match.

use hecs::World;

use wardkeep_core::components::{Body, Health};
use wardkeep_core::types::Position;

use crate::components::{Building, Order, Owner, ResourceNode, Unit};
use crate::constants::*;
use crate::enums::{BuildingKind, PlayerId, ResourceKind, UnitKind};

/// Set up the standard two-player match: a base and a worker per side,
/// and a mineral node near each base.
pub fn setup_match(world: &mut World) {
    spawn_building(world, BuildingKind::CommandCenter, PlayerId::One, Position::new(160.0, 160.0));
    spawn_unit(world, UnitKind::Worker, PlayerId::One, Position::new(160.0, 192.0));
    spawn_node(world, ResourceKind::Minerals, Position::new(320.0, 320.0), NODE_AMOUNT);

    spawn_building(world, BuildingKind::Hatchery, PlayerId::Two, Position::new(864.0, 608.0));
    spawn_unit(world, UnitKind::Worker, PlayerId::Two, Position::new(864.0, 576.0));
    spawn_node(world, ResourceKind::Minerals, Position::new(704.0, 320.0), NODE_AMOUNT);
}

pub fn spawn_unit(world: &mut World, kind: UnitKind, owner: PlayerId, at: Position) -> hecs::Entity {
    world.spawn((
        Unit {
            kind,
            speed: UNIT_SPEED,
        },
        Owner(owner),
        at,
        Body {
            radius: UNIT_SIZE / 2.0,
        },
        Health::full(UNIT_MAX_HEALTH),
        Order::Idle,
    ))
}

pub fn spawn_building(
    world: &mut World,
    kind: BuildingKind,
    owner: PlayerId,
    at: Position,
) -> hecs::Entity {
    world.spawn((
        Building { kind },
        Owner(owner),
        at,
        Body {
            radius: BUILDING_SIZE / 2.0,
        },
        Health::full(BUILDING_MAX_HEALTH),
    ))
}

pub fn spawn_node(
    world: &mut World,
    kind: ResourceKind,
    at: Position,
    amount: u32,
) -> hecs::Entity {
    world.spawn((
        ResourceNode {
            kind,
            amount,
            depleted: false,
        },
        at,
    ))
}
