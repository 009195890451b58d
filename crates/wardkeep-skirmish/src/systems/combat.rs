//! Attack orders: in-range damage, stand-and-fight.
//!
//! A unit with an attack order damages its target every tick the
//! target is within range; it does not chase. Dead or vanished targets
//! clear the order. Removal of the dead happens in cleanup.

use hecs::{Entity, World};

use wardkeep_core::components::Health;
use wardkeep_core::types::Position;

use crate::components::Order;
use crate::constants::{ATTACK_DAMAGE, ATTACK_RANGE};

pub fn run(world: &mut World) {
    let attackers: Vec<(Entity, Entity)> = world
        .query::<&Order>()
        .iter()
        .filter_map(|(entity, order)| match order {
            Order::Attack { target } => Some((entity, *target)),
            _ => None,
        })
        .collect();

    for (attacker, target) in attackers {
        let target_alive = world
            .get::<&Health>(target)
            .map(|health| health.current > 0)
            .unwrap_or(false);
        if !target_alive {
            if let Ok(mut order) = world.get::<&mut Order>(attacker) {
                *order = Order::Idle;
            }
            continue;
        }

        let in_range = match (
            world.get::<&Position>(attacker),
            world.get::<&Position>(target),
        ) {
            (Ok(a), Ok(t)) => a.distance_to(&t) <= ATTACK_RANGE,
            _ => false,
        };
        if !in_range {
            continue;
        }

        let killed = match world.get::<&mut Health>(target) {
            Ok(mut health) => {
                health.current -= ATTACK_DAMAGE;
                health.current <= 0
            }
            Err(_) => false,
        };
        if killed {
            if let Ok(mut order) = world.get::<&mut Order>(attacker) {
                *order = Order::Idle;
            }
        }
    }
}
