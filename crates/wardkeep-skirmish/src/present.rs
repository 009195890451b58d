//! Lowers a snapshot into draw calls for the rendering collaborator.

use wardkeep_core::render::{self, Color, Frame};
use wardkeep_core::types::Position;

use crate::constants::{BUILDING_SIZE, UNIT_SIZE};
use crate::enums::{PlayerId, ResourceKind, UnitKind};
use crate::state::GameStateSnapshot;

fn player_color(id: PlayerId) -> Color {
    match id {
        PlayerId::One => render::BLUE,
        PlayerId::Two => render::RED,
    }
}

pub fn frame(snap: &GameStateSnapshot) -> Frame {
    let mut frame = Frame::with_clear(render::BLACK);

    for node in &snap.nodes {
        if node.depleted {
            continue;
        }
        let color = match node.kind {
            ResourceKind::Minerals => render::GREEN,
            ResourceKind::Gas => render::YELLOW,
        };
        frame.rect(node.position, 32.0, 32.0, color);
    }

    for building in &snap.buildings {
        frame.rect(building.position, BUILDING_SIZE, BUILDING_SIZE, player_color(building.owner));
        let ratio = building.health.max(0) as f32 / building.max_health as f32;
        frame.health_bar(
            Position::new(building.position.x, building.position.y - 20.0),
            40.0,
            6.0,
            ratio,
            render::RED,
            render::GREEN,
        );
    }

    for unit in &snap.units {
        let color = player_color(unit.owner);
        match unit.kind {
            UnitKind::Worker | UnitKind::Probe => {
                frame.circle(unit.position, UNIT_SIZE / 2.0, color);
            }
            _ => frame.rect(unit.position, UNIT_SIZE, UNIT_SIZE, color),
        }
        let ratio = unit.health.max(0) as f32 / unit.max_health as f32;
        frame.health_bar(
            Position::new(unit.position.x, unit.position.y - 10.0),
            20.0,
            4.0,
            ratio,
            render::RED,
            render::GREEN,
        );
    }

    // Selection rings around the human player's chosen units.
    for unit in &snap.units {
        if snap.selection.contains(&unit.id) {
            frame.circle(unit.position, UNIT_SIZE / 2.0 + 2.0, render::WHITE);
        }
    }

    if let Some(human) = snap.players.iter().find(|p| p.id == PlayerId::One) {
        frame.label(
            format!(
                "Minerals: {} | Supply: {}/{}",
                human.minerals, human.supply_used, human.supply_max
            ),
            Position::new(10.0, 10.0),
            render::WHITE,
        );
    }
    if let Some(opponent) = snap.players.iter().find(|p| p.id == PlayerId::Two) {
        frame.label(
            format!("AI Minerals: {}", opponent.minerals),
            Position::new(10.0, 50.0),
            render::WHITE,
        );
    }

    frame
}
