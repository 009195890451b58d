//! Wave/day director — the timer-driven spawner and phase machine.
//!
//! Endless variant: a frame counter spawns `wave * N` enemies each time
//! it crosses the interval. Day/night variant: a build timer counts
//! down to nightfall, and clearing the night pays out gold and starts
//! the next, longer, build phase.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use wardkeep_core::types::Arena;

use crate::components::Enemy;
use crate::config::Ruleset;
use crate::constants::*;
use crate::enums::{GameMode, GamePhase, RoundOutcome};
use crate::events::GameEvent;
use crate::world_setup;

/// Director bookkeeping: wave/day counters and timers.
#[derive(Debug, Clone, Copy)]
pub struct Director {
    pub wave: u32,
    pub wave_timer: u32,
    pub day: u32,
    pub build_ticks: u32,
}

/// Gold on hand plus bounties accumulated during the current night.
#[derive(Debug, Clone, Copy, Default)]
pub struct Economy {
    pub gold: u32,
    pub night_earnings: u32,
}

impl Director {
    pub fn fresh(ruleset: &Ruleset) -> Self {
        match ruleset.mode {
            GameMode::Endless => Self {
                wave: 0,
                wave_timer: 0,
                day: 0,
                build_ticks: 0,
            },
            GameMode::DayNight => Self {
                wave: 0,
                wave_timer: 0,
                day: 1,
                build_ticks: BUILD_TICKS_BASE,
            },
        }
    }
}

impl Economy {
    pub fn fresh(ruleset: &Ruleset) -> Self {
        Self {
            gold: ruleset.starting_gold,
            night_earnings: 0,
        }
    }

    /// Record a kill bounty, paid out at dawn.
    pub fn record_kill(&mut self, bounty: u32) {
        self.night_earnings += bounty;
    }
}

/// Pre-combat step: advance timers and spawn any due enemies.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    director: &mut Director,
    phase: &mut GamePhase,
    ruleset: &Ruleset,
    arena: &Arena,
    events: &mut Vec<GameEvent>,
) {
    match ruleset.mode {
        GameMode::Endless => {
            director.wave_timer += 1;
            if director.wave_timer > WAVE_INTERVAL_TICKS {
                director.wave_timer = 0;
                director.wave += 1;
                let count = director.wave * ruleset.spawn_per_cycle;
                spawn_batch(world, rng, arena, count);
                events.push(GameEvent::WaveSpawned {
                    wave: director.wave,
                    count,
                });
            }
        }
        GameMode::DayNight => {
            if *phase == GamePhase::Build {
                director.build_ticks = director.build_ticks.saturating_sub(1);
                if director.build_ticks == 0 {
                    *phase = GamePhase::Defend;
                    let count = director.day * ruleset.spawn_per_cycle;
                    spawn_batch(world, rng, arena, count);
                    events.push(GameEvent::NightFell {
                        day: director.day,
                        count,
                    });
                }
            }
        }
    }
}

/// Post-combat step: terminal conditions and day rollover.
///
/// Defeat takes priority over a simultaneous clear.
pub fn resolve(
    world: &World,
    director: &mut Director,
    economy: &mut Economy,
    phase: &mut GamePhase,
    ruleset: &Ruleset,
    events: &mut Vec<GameEvent>,
) {
    if *phase != GamePhase::Defend {
        return;
    }

    if let Some((_, _, _, health)) = world_setup::king_status(world) {
        if health <= 0 {
            *phase = GamePhase::Defeat;
            events.push(GameEvent::RoundEnded {
                outcome: RoundOutcome::Defeat,
            });
            return;
        }
    }

    if ruleset.mode == GameMode::DayNight && count_enemies(world) == 0 {
        let payout = economy.night_earnings + director.day * DAY_BONUS_GOLD;
        economy.gold += payout;
        economy.night_earnings = 0;
        director.build_ticks = BUILD_TICKS_BASE + director.day * BUILD_TICKS_PER_DAY;
        director.day += 1;
        if director.day > VICTORY_DAY {
            *phase = GamePhase::Victory;
            events.push(GameEvent::RoundEnded {
                outcome: RoundOutcome::Victory,
            });
        } else {
            *phase = GamePhase::Build;
            events.push(GameEvent::DayBroke {
                day: director.day,
                payout,
            });
        }
    }
}

fn spawn_batch(world: &mut World, rng: &mut ChaCha8Rng, arena: &Arena, count: u32) {
    let king_pos = world_setup::king_status(world)
        .map(|(_, pos, _, _)| pos)
        .unwrap_or_else(|| arena.center());
    for _ in 0..count {
        world_setup::spawn_enemy(world, rng, arena, king_pos);
    }
}

fn count_enemies(world: &World) -> usize {
    world.query::<&Enemy>().iter().count()
}
