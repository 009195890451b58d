//! Enemy movement and king contact.

use hecs::{Entity, World};

use wardkeep_core::components::{Body, Health};
use wardkeep_core::types::Position;

use crate::components::Enemy;
use crate::events::GameEvent;
use crate::world_setup;

/// March every enemy toward its captured target point at constant speed.
pub fn run(world: &mut World) {
    for (_entity, (enemy, pos)) in world.query_mut::<(&Enemy, &mut Position)>() {
        pos.step_toward(&enemy.target, enemy.speed);
    }
}

/// Enemies that reach the king deal contact damage and are removed.
pub fn king_contact(
    world: &mut World,
    contact_damage: i32,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    let (king_entity, king_pos, king_radius, _) = match world_setup::king_status(world) {
        Some(status) => status,
        None => return,
    };

    despawn_buffer.clear();
    for (entity, (_, pos, body)) in world.query::<(&Enemy, &Position, &Body)>().iter() {
        if pos.distance_to(&king_pos) < body.radius + king_radius {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        if let Ok(mut health) = world.get::<&mut Health>(king_entity) {
            health.current -= contact_damage;
            events.push(GameEvent::KingStruck {
                damage: contact_damage,
                remaining: health.current,
            });
        }
        let _ = world.despawn(entity);
    }
}
