//! Simulation engine — the core of both tower-defense variants.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use wardkeep_core::components::Weapon;
use wardkeep_core::types::{Arena, SimTime};

use crate::commands::PlayerCommand;
use crate::config::{Ruleset, SimConfig};
use crate::constants::TOWER_COST;
use crate::enums::{GameMode, GamePhase, ProjectileSource};
use crate::events::GameEvent;
use crate::state::GameStateSnapshot;
use crate::systems;
use crate::systems::director::{Director, Economy};
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all round state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    ruleset: Ruleset,
    arena: Arena,
    seed: u64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    director: Director,
    economy: Economy,
}

impl GameEngine {
    /// Create a new engine and set up a fresh round.
    pub fn new(config: SimConfig) -> Self {
        let ruleset = Ruleset::for_mode(config.mode);
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: ruleset.opening_phase,
            ruleset,
            arena: config.arena,
            seed: config.seed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            director: Director::fresh(&ruleset),
            economy: Economy::fresh(&ruleset),
        };
        world_setup::setup_round(&mut engine.world, engine.ruleset.mode, &engine.arena);
        engine
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. Ended rounds stand still until a restart.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if !self.phase.is_over() {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.ruleset.mode,
            self.phase,
            &self.director,
            &self.economy,
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn mode(&self) -> GameMode {
        self.ruleset.mode
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Drop the king to zero health (for exercising defeat paths).
    #[cfg(test)]
    pub fn strike_down_king(&mut self) {
        use crate::components::King;
        use wardkeep_core::components::Health;
        for (_entity, (_, health)) in self.world.query_mut::<(&King, &mut Health)>() {
            health.current = 0;
        }
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Shoot { target } => {
                if self.phase != GamePhase::Defend {
                    return;
                }
                let Some((king_entity, king_pos, _, _)) = world_setup::king_status(&self.world)
                else {
                    return;
                };
                let ready = self
                    .world
                    .get::<&Weapon>(king_entity)
                    .map(|weapon| weapon.cooldown == 0)
                    .unwrap_or(false);
                if !ready {
                    return;
                }
                let damage = self
                    .world
                    .get::<&Weapon>(king_entity)
                    .map(|weapon| weapon.damage)
                    .unwrap_or(0);
                if world_setup::spawn_projectile(
                    &mut self.world,
                    king_pos,
                    target,
                    damage,
                    ProjectileSource::King,
                )
                .is_some()
                {
                    if let Ok(mut weapon) = self.world.get::<&mut Weapon>(king_entity) {
                        weapon.cooldown = weapon.delay;
                    }
                }
            }
            PlayerCommand::PlaceTower { at } => {
                if self.phase != GamePhase::Build
                    || self.economy.gold < TOWER_COST
                    || !self.arena.contains(&at)
                {
                    return;
                }
                self.economy.gold -= TOWER_COST;
                world_setup::spawn_tower(&mut self.world, at);
                self.events.push(GameEvent::TowerRaised { at });
            }
            PlayerCommand::Restart => {
                if self.phase.is_over() {
                    self.reset();
                }
            }
        }
    }

    /// Reset everything to a state identical to a fresh engine.
    fn reset(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.phase = self.ruleset.opening_phase;
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.director = Director::fresh(&self.ruleset);
        self.economy = Economy::fresh(&self.ruleset);
        self.events.clear();
        world_setup::setup_round(&mut self.world, self.ruleset.mode, &self.arena);
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Director: timers and spawning
        systems::director::run(
            &mut self.world,
            &mut self.rng,
            &mut self.director,
            &mut self.phase,
            &self.ruleset,
            &self.arena,
            &mut self.events,
        );
        // 2. Cooldowns and tower fire
        systems::combat::run(&mut self.world);
        // 3. Enemy movement
        systems::movement::run(&mut self.world);
        // 4. King contact damage
        systems::movement::king_contact(
            &mut self.world,
            self.ruleset.contact_damage,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 5. Projectile flight and impact
        systems::projectile::run(
            &mut self.world,
            &self.arena,
            &mut self.economy,
            &mut self.events,
        );
        // 6. Terminal conditions and day rollover
        systems::director::resolve(
            &self.world,
            &mut self.director,
            &mut self.economy,
            &mut self.phase,
            &self.ruleset,
            &mut self.events,
        );
    }
}
