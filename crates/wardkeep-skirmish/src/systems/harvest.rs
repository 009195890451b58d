//! Harvest orders: walk to the node, then drain it into the owner's
//! mineral counter.
//!
//! The drain happens first; the tick that empties the node marks it
//! depleted and yields no credit. Depleted or vanished nodes clear the
//! order.

use hecs::{Entity, World};

use wardkeep_core::types::Position;

use crate::components::{Order, Owner, ResourceNode, Unit};
use crate::constants::{HARVEST_RANGE, HARVEST_RATE};
use crate::events::GameEvent;
use crate::player::PlayerState;

pub fn run(world: &mut World, players: &mut [PlayerState; 2], events: &mut Vec<GameEvent>) {
    let harvesters: Vec<(Entity, Entity, f32)> = world
        .query::<(&Unit, &Order)>()
        .iter()
        .filter_map(|(entity, (unit, order))| match order {
            Order::Harvest { node } => Some((entity, *node, unit.speed)),
            _ => None,
        })
        .collect();

    for (worker, node, speed) in harvesters {
        let node_state = world
            .get::<&ResourceNode>(node)
            .ok()
            .map(|n| n.depleted)
            .zip(world.get::<&Position>(node).ok().map(|p| *p));
        let Some((depleted, node_pos)) = node_state else {
            set_idle(world, worker);
            continue;
        };
        if depleted {
            set_idle(world, worker);
            continue;
        }

        let worker_pos = match world.get::<&Position>(worker) {
            Ok(pos) => *pos,
            Err(_) => continue,
        };

        if worker_pos.distance_to(&node_pos) < HARVEST_RANGE {
            let owner = world.get::<&Owner>(worker).map(|o| o.0).ok();
            let mut ran_dry = false;
            if let Ok(mut state) = world.get::<&mut ResourceNode>(node) {
                state.amount = state.amount.saturating_sub(HARVEST_RATE);
                if state.amount == 0 {
                    state.depleted = true;
                    ran_dry = true;
                } else if let Some(owner) = owner {
                    players[owner.index()].minerals += HARVEST_RATE;
                }
            }
            if ran_dry {
                set_idle(world, worker);
                events.push(GameEvent::NodeDepleted {
                    node: node.to_bits().get(),
                });
            }
        } else if let Ok(mut pos) = world.get::<&mut Position>(worker) {
            pos.step_toward(&node_pos, speed);
        }
    }
}

fn set_idle(world: &mut World, worker: Entity) {
    if let Ok(mut order) = world.get::<&mut Order>(worker) {
        *order = Order::Idle;
    }
}
