//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot. Read-only — it never modifies the world.

use hecs::{Entity, World};

use wardkeep_core::components::Health;
use wardkeep_core::types::{Position, SimTime};

use crate::components::{Building, Order, Owner, ResourceNode, Unit};
use crate::events::GameEvent;
use crate::player::PlayerState;
use crate::state::*;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    players: &[PlayerState; 2],
    selection: &[Entity],
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        players: players.iter().map(build_player).collect(),
        units: build_units(world),
        buildings: build_buildings(world),
        nodes: build_nodes(world),
        selection: selection.iter().map(|e| e.to_bits().get()).collect(),
        events,
    }
}

fn build_player(player: &PlayerState) -> PlayerView {
    PlayerView {
        id: player.id,
        race: player.race,
        minerals: player.minerals,
        gas: player.gas,
        supply_used: player.supply_used,
        supply_max: player.supply_max,
    }
}

fn build_units(world: &World) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = world
        .query::<(&Unit, &Owner, &Position, &Health, &Order)>()
        .iter()
        .map(|(entity, (unit, owner, pos, health, order))| UnitView {
            id: entity.to_bits().get(),
            owner: owner.0,
            kind: unit.kind,
            position: *pos,
            health: health.current,
            max_health: health.max,
            order: order.kind(),
        })
        .collect();
    units.sort_by_key(|u| u.id);
    units
}

fn build_buildings(world: &World) -> Vec<BuildingView> {
    let mut buildings: Vec<BuildingView> = world
        .query::<(&Building, &Owner, &Position, &Health)>()
        .iter()
        .map(|(entity, (building, owner, pos, health))| BuildingView {
            id: entity.to_bits().get(),
            owner: owner.0,
            kind: building.kind,
            position: *pos,
            health: health.current,
            max_health: health.max,
        })
        .collect();
    buildings.sort_by_key(|b| b.id);
    buildings
}

fn build_nodes(world: &World) -> Vec<NodeView> {
    let mut nodes: Vec<NodeView> = world
        .query::<(&ResourceNode, &Position)>()
        .iter()
        .map(|(entity, (node, pos))| NodeView {
            id: entity.to_bits().get(),
            kind: node.kind,
            position: *pos,
            amount: node.amount,
            depleted: node.depleted,
        })
        .collect();
    nodes.sort_by_key(|n| n.id);
    nodes
}
