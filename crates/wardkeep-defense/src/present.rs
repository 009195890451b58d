//! Lowers a snapshot into draw calls for the rendering collaborator.
//!
//! Draw order matters: ground, throne base, king, towers, enemies,
//! projectiles, then the HUD labels on top.

use wardkeep_core::render::{self, Frame};
use wardkeep_core::types::{Arena, Position};

use crate::enums::{GameMode, GamePhase, ProjectileSource};
use crate::state::GameStateSnapshot;

const HEALTH_BAR_HEIGHT: f32 = 5.0;

pub fn frame(snap: &GameStateSnapshot, arena: &Arena) -> Frame {
    let mut frame = Frame::with_clear(render::BROWN);

    // Throne base under the king.
    frame.rect(snap.king.position, 60.0, 60.0, render::BLACK);

    // King: body, crown, health bar.
    frame.circle(snap.king.position, snap.king.radius, render::BLUE);
    let crown_y = snap.king.position.y - snap.king.radius;
    frame.line(
        Position::new(snap.king.position.x - 10.0, crown_y),
        Position::new(snap.king.position.x + 10.0, crown_y),
        render::YELLOW,
    );
    let king_ratio = snap.king.health.max(0) as f32 / snap.king.max_health as f32;
    frame.health_bar(
        Position::new(snap.king.position.x, crown_y - 10.0),
        40.0,
        HEALTH_BAR_HEIGHT,
        king_ratio,
        render::RED,
        render::GREEN,
    );

    for tower in &snap.towers {
        frame.rect(tower.position, 20.0, 20.0, render::GRAY);
    }

    for enemy in &snap.enemies {
        frame.circle(enemy.position, enemy.radius, render::RED);
        let ratio = enemy.health.max(0) as f32 / enemy.max_health as f32;
        frame.health_bar(
            Position::new(enemy.position.x, enemy.position.y - enemy.radius - 8.0),
            30.0,
            4.0,
            ratio,
            render::RED,
            render::GREEN,
        );
    }

    for projectile in &snap.projectiles {
        let color = match projectile.source {
            ProjectileSource::King => render::WHITE,
            _ => render::YELLOW,
        };
        frame.circle(projectile.position, projectile.radius, color);
    }

    hud(&mut frame, snap, arena);
    frame
}

fn hud(frame: &mut Frame, snap: &GameStateSnapshot, arena: &Arena) {
    match snap.mode {
        GameMode::Endless => {
            frame.label(format!("Wave: {}", snap.wave), Position::new(10.0, 10.0), render::WHITE);
            frame.label(
                format!("Health: {}", snap.king.health),
                Position::new(10.0, 50.0),
                render::WHITE,
            );
        }
        GameMode::DayNight => {
            frame.label(format!("Day {}", snap.day), Position::new(10.0, 10.0), render::WHITE);
            frame.label(format!("Gold: {}", snap.gold), Position::new(10.0, 50.0), render::WHITE);
            frame.label(
                format!("Health: {}", snap.king.health),
                Position::new(10.0, 90.0),
                render::WHITE,
            );
            match snap.phase {
                GamePhase::Build => {
                    frame.label(
                        "BUILD PHASE - place towers (50 gold)",
                        Position::new(10.0, arena.height - 50.0),
                        render::WHITE,
                    );
                    frame.label(
                        format!("Time left: {}", snap.build_ticks_remaining / 60 + 1),
                        Position::new(10.0, arena.height - 30.0),
                        render::WHITE,
                    );
                }
                GamePhase::Defend => {
                    frame.label(
                        "DEFEND PHASE - shoot!",
                        Position::new(10.0, arena.height - 50.0),
                        render::WHITE,
                    );
                    frame.label(
                        format!("Enemies left: {}", snap.enemies.len()),
                        Position::new(10.0, arena.height - 30.0),
                        render::WHITE,
                    );
                }
                _ => {}
            }
        }
    }

    let center = Position::new(arena.width / 2.0 - 150.0, arena.height / 2.0);
    match snap.phase {
        GamePhase::Defeat => {
            frame.label("Game Over! Press R to Restart", center, render::RED);
        }
        GamePhase::Victory => {
            frame.label("Victory! Press R to Restart", center, render::GREEN);
        }
        _ => {}
    }
}
