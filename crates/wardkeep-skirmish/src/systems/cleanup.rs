//! Cleanup system: removes units whose health reached zero.
//!
//! Runs after combat so a unit killed this tick disappears this tick.
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use wardkeep_core::components::Health;

use crate::components::{Owner, Unit};
use crate::events::GameEvent;

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<GameEvent>) {
    despawn_buffer.clear();

    for (entity, (unit, owner, health)) in world.query_mut::<(&Unit, &Owner, &Health)>() {
        if health.current <= 0 {
            despawn_buffer.push(entity);
            events.push(GameEvent::UnitSlain {
                owner: owner.0,
                kind: unit.kind,
            });
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
