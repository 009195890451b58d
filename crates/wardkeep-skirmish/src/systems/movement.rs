//! Unit movement: carries out Move orders.

use hecs::World;

use wardkeep_core::types::Position;

use crate::components::{Order, Unit};

/// Step every moving unit toward its destination; arrivals go idle.
pub fn run(world: &mut World) {
    for (_entity, (unit, pos, order)) in world.query_mut::<(&Unit, &mut Position, &mut Order)>() {
        if let Order::Move { dest } = *order {
            if pos.step_toward(&dest, unit.speed) {
                *order = Order::Idle;
            }
        }
    }
}
