//! wardkeep: headless demo runner for the three games.
//!
//! Usage:
//!   wardkeep endless  [--seed N] [--secs N]
//!   wardkeep daynight [--seed N] [--secs N]
//!   wardkeep skirmish [--seed N] [--secs N]
//!
//! Runs the chosen game in the real-time loop with a small scripted
//! player and prints one JSON status line per second.

use std::process;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use wardkeep_app::driver::{spawn_game_loop, LoopCommand};

use wardkeep_core::render::{NullSink, RenderSink};
use wardkeep_core::types::Position;

use wardkeep_defense::config::SimConfig as DefenseConfig;
use wardkeep_defense::enums::{GameMode, GamePhase};
use wardkeep_defense::GameEngine;

use wardkeep_skirmish::config::SimConfig as SkirmishConfig;
use wardkeep_skirmish::enums::{PlayerId, UnitKind};
use wardkeep_skirmish::SkirmishEngine;

/// How often the scripted player looks at the world and reacts.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let seed = flag_value(&args, "--seed").unwrap_or(42);
    let secs = flag_value(&args, "--secs").unwrap_or(10);

    match args[1].as_str() {
        "endless" => run_defense(GameMode::Endless, seed, secs),
        "daynight" => run_defense(GameMode::DayNight, seed, secs),
        "skirmish" => run_skirmish(seed, secs),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown game: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "wardkeep: headless demo runner\n\
         \n\
         Games:\n\
         \n\
         endless   Endless wave defense (king + towers)\n\
         daynight  Build by day, defend by night\n\
         skirmish  Two-player RTS skirmish vs the computer\n\
         \n\
         Options:\n\
         \n\
           --seed <N>  RNG seed (default: 42)\n\
           --secs <N>  Seconds to run (default: 10)\n"
    );
}

fn flag_value(args: &[String], flag: &str) -> Option<u64> {
    let index = args.iter().position(|a| a == flag)?;
    args.get(index + 1)?.parse().ok()
}

fn run_defense(mode: GameMode, seed: u64, secs: u64) {
    let config = DefenseConfig {
        seed,
        mode,
        ..DefenseConfig::default()
    };
    let arena = config.arena;
    let engine = GameEngine::new(config);
    let latest = Arc::new(Mutex::new(None));
    let (tx, handle) = spawn_game_loop(engine, Arc::clone(&latest));

    let polls = secs * 4;
    let mut towers_placed = 0u32;
    let mut sink = NullSink;
    for poll in 0..polls {
        std::thread::sleep(POLL_INTERVAL);
        let Some(snap) = latest.lock().ok().and_then(|lock| lock.clone()) else {
            continue;
        };

        let frame = wardkeep_defense::present::frame(&snap, &arena);
        sink.present(&frame);

        // Scripted player: shoot the closest enemy, build when allowed.
        match snap.phase {
            GamePhase::Defend => {
                if let Some(enemy) = snap.enemies.first() {
                    let _ = tx.send(LoopCommand::Command(
                        wardkeep_defense::PlayerCommand::Shoot {
                            target: enemy.position,
                        },
                    ));
                }
            }
            GamePhase::Build => {
                if snap.gold >= 50 && towers_placed < 6 {
                    let slot = towers_placed as f32;
                    let _ = tx.send(LoopCommand::Command(
                        wardkeep_defense::PlayerCommand::PlaceTower {
                            at: Position::new(150.0 + slot * 100.0, 200.0),
                        },
                    ));
                    towers_placed += 1;
                }
            }
            _ => {
                let _ = tx.send(LoopCommand::Command(
                    wardkeep_defense::PlayerCommand::Restart,
                ));
            }
        }

        if poll % 4 == 3 {
            let line = serde_json::json!({
                "tick": snap.time.tick,
                "phase": snap.phase,
                "wave": snap.wave,
                "day": snap.day,
                "gold": snap.gold,
                "health": snap.king.health,
                "enemies": snap.enemies.len(),
                "projectiles": snap.projectiles.len(),
                "draws": frame.draws.len(),
            });
            println!("{line}");
        }
    }

    let _ = tx.send(LoopCommand::Shutdown);
    let _ = handle.join();
}

fn run_skirmish(seed: u64, secs: u64) {
    let engine = SkirmishEngine::new(SkirmishConfig {
        seed,
        ..SkirmishConfig::default()
    });
    let latest = Arc::new(Mutex::new(None));
    let (tx, handle) = spawn_game_loop(engine, Arc::clone(&latest));

    let polls = secs * 4;
    let mut sent_to_work = false;
    let mut sink = NullSink;
    for poll in 0..polls {
        std::thread::sleep(POLL_INTERVAL);
        let Some(snap) = latest.lock().ok().and_then(|lock| lock.clone()) else {
            continue;
        };

        let frame = wardkeep_skirmish::present::frame(&snap);
        sink.present(&frame);

        // Scripted player: put the starting worker on minerals once.
        if !sent_to_work {
            let worker = snap
                .units
                .iter()
                .find(|u| u.owner == PlayerId::One && u.kind == UnitKind::Worker);
            let node = snap.nodes.iter().find(|n| !n.depleted);
            if let (Some(worker), Some(node)) = (worker, node) {
                let commands = [
                    wardkeep_skirmish::PlayerCommand::SelectPress {
                        at: worker.position,
                        additive: false,
                    },
                    wardkeep_skirmish::PlayerCommand::SelectRelease {
                        at: worker.position,
                        additive: false,
                    },
                    wardkeep_skirmish::PlayerCommand::CommandAt { at: node.position },
                ];
                for command in commands {
                    let _ = tx.send(LoopCommand::Command(command));
                }
                sent_to_work = true;
            }
        }

        if poll % 4 == 3 {
            let minerals: Vec<u32> = snap.players.iter().map(|p| p.minerals).collect();
            let line = serde_json::json!({
                "tick": snap.time.tick,
                "minerals": minerals,
                "units": snap.units.len(),
                "buildings": snap.buildings.len(),
                "selection": snap.selection.len(),
                "draws": frame.draws.len(),
            });
            println!("{line}");
        }
    }

    let _ = tx.send(LoopCommand::Shutdown);
    let _ = handle.join();
}
