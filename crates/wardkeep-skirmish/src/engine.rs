//! Skirmish engine — owns the world, the players, and the human
//! player's selection state.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use wardkeep_core::components::Body;
use wardkeep_core::types::{Arena, Position, SimTime};

use crate::commands::PlayerCommand;
use crate::components::{Building, Order, Owner, ResourceNode, Unit};
use crate::config::SimConfig;
use crate::constants::*;
use crate::enums::{PlayerId, Race};
use crate::events::GameEvent;
use crate::opponent;
use crate::player::PlayerState;
use crate::state::GameStateSnapshot;
use crate::systems;
use crate::world_setup;

pub struct SkirmishEngine {
    world: World,
    time: SimTime,
    arena: Arena,
    rng: ChaCha8Rng,
    players: [PlayerState; 2],
    /// The human player's current selection.
    selection: Vec<Entity>,
    /// Where the current left-button drag started, if one is active.
    drag_origin: Option<Position>,
    opponent_timer: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
}

impl SkirmishEngine {
    /// Create a new engine and set up the standard match.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            arena: config.arena,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            players: [
                PlayerState::new(PlayerId::One, Race::Terran),
                PlayerState::new(PlayerId::Two, Race::Zerg),
            ],
            selection: Vec::new(),
            drag_origin: None,
            opponent_timer: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        };
        world_setup::setup_match(&mut engine.world);
        engine
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();
        self.run_systems();
        self.time.advance();

        // Despawned units fall out of the selection.
        let world = &self.world;
        self.selection.retain(|entity| world.contains(*entity));

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, &self.players, &self.selection, events)
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id.index()]
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        &mut self.players[id.index()]
    }

    #[cfg(test)]
    pub fn selection(&self) -> &[Entity] {
        &self.selection
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SelectPress { at, additive } => {
                self.drag_origin = Some(at);
                if !additive {
                    self.selection.clear();
                }
                if let Some(entity) = self.own_unit_at(at) {
                    if additive {
                        if !self.selection.contains(&entity) {
                            self.selection.push(entity);
                        }
                    } else {
                        self.selection = vec![entity];
                    }
                }
            }
            PlayerCommand::SelectRelease { at, additive } => {
                let Some(origin) = self.drag_origin.take() else {
                    return;
                };
                if (at.x - origin.x).abs() <= DRAG_THRESHOLD
                    || (at.y - origin.y).abs() <= DRAG_THRESHOLD
                {
                    return;
                }
                if !additive {
                    self.selection.clear();
                }
                let min = Position::new(origin.x.min(at.x), origin.y.min(at.y));
                let max = Position::new(origin.x.max(at.x), origin.y.max(at.y));
                let covered: Vec<Entity> = self
                    .world
                    .query::<(&Unit, &Owner, &Position, &Body)>()
                    .iter()
                    .filter(|(_, (_, owner, pos, body))| {
                        owner.0 == PlayerId::One
                            && pos.x + body.radius >= min.x
                            && pos.x - body.radius <= max.x
                            && pos.y + body.radius >= min.y
                            && pos.y - body.radius <= max.y
                    })
                    .map(|(entity, _)| entity)
                    .collect();
                for entity in covered {
                    if !self.selection.contains(&entity) {
                        self.selection.push(entity);
                    }
                }
            }
            PlayerCommand::CommandAt { at } => {
                let node = self.live_node_near(at);
                let selected = self.selection.clone();
                for entity in selected {
                    let is_worker = self
                        .world
                        .get::<&Unit>(entity)
                        .map(|unit| unit.kind.is_worker())
                        .unwrap_or(false);
                    if let Ok(mut order) = self.world.get::<&mut Order>(entity) {
                        *order = match node {
                            Some(node) if is_worker => Order::Harvest { node },
                            _ => Order::Move { dest: at },
                        };
                    }
                }
            }
            PlayerCommand::PlaceBuilding { kind, at } => {
                // The lead selected unit must be a worker, and the
                // build must be affordable up front.
                let Some(&lead) = self.selection.first() else {
                    return;
                };
                let is_worker = self
                    .world
                    .get::<&Unit>(lead)
                    .map(|unit| unit.kind.is_worker())
                    .unwrap_or(false);
                if !is_worker
                    || self.players[PlayerId::One.index()].minerals
                        < systems::production::building_cost(kind)
                    || !self.arena.contains(&at)
                {
                    return;
                }
                if let Ok(mut order) = self.world.get::<&mut Order>(lead) {
                    *order = Order::Build { kind, site: at };
                }
            }
            PlayerCommand::Train { kind } => {
                let building = self
                    .world
                    .query::<(&Building, &Owner)>()
                    .iter()
                    .find(|(_, (building, owner))| {
                        owner.0 == PlayerId::One && systems::production::can_train(building.kind, kind)
                    })
                    .map(|(entity, _)| entity);
                if let Some(building) = building {
                    systems::production::train_unit(
                        &mut self.world,
                        &mut self.players[PlayerId::One.index()],
                        building,
                        kind,
                        &mut self.rng,
                        &mut self.events,
                    );
                }
            }
        }
    }

    /// First own unit (in storage order) whose footprint square
    /// contains the point.
    fn own_unit_at(&self, at: Position) -> Option<Entity> {
        self.world
            .query::<(&Unit, &Owner, &Position, &Body)>()
            .iter()
            .find(|(_, (_, owner, pos, body))| {
                owner.0 == PlayerId::One
                    && (at.x - pos.x).abs() <= body.radius
                    && (at.y - pos.y).abs() <= body.radius
            })
            .map(|(entity, _)| entity)
    }

    /// First undepleted resource node within click radius of the point.
    fn live_node_near(&self, at: Position) -> Option<Entity> {
        self.world
            .query::<(&ResourceNode, &Position)>()
            .iter()
            .find(|(_, (node, pos))| !node.depleted && at.distance_to(pos) < RESOURCE_CLICK_RADIUS)
            .map(|(entity, _)| entity)
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Opponent decision turn, once per interval
        self.opponent_timer += 1;
        if self.opponent_timer > OPPONENT_INTERVAL_TICKS {
            self.opponent_timer = 0;
            opponent::run(
                &mut self.world,
                &mut self.players,
                &mut self.rng,
                &mut self.events,
            );
        }
        // 2. Move orders
        systems::movement::run(&mut self.world);
        // 3. Attack orders
        systems::combat::run(&mut self.world);
        // 4. Harvest orders
        systems::harvest::run(&mut self.world, &mut self.players, &mut self.events);
        // 5. Build orders
        systems::production::construction(&mut self.world, &mut self.players, &mut self.events);
        // 6. Remove the dead
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.events);
    }
}

impl Default for SkirmishEngine {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

/// All units belonging to one player, in storage order.
pub fn units_of(world: &World, owner: PlayerId) -> Vec<Entity> {
    world
        .query::<(&Unit, &Owner)>()
        .iter()
        .filter(|(_, (_, o))| o.0 == owner)
        .map(|(entity, _)| entity)
        .collect()
}
