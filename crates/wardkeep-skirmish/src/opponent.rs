//! Bridge between the engine and the wardkeep-ai opponent controller.
//!
//! Builds a plain-data view of the world, asks the controller what to
//! do, and applies the returned actions to the ECS world.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use wardkeep_core::types::Position;

use wardkeep_ai::director::{ActorRef, NodeRef, OpponentAction, OpponentContext};

use crate::components::{Building, Order, Owner, ResourceNode, Unit};
use crate::constants::UNIT_COST;
use crate::enums::PlayerId;
use crate::events::GameEvent;
use crate::player::PlayerState;
use crate::systems::production;

/// One opponent decision turn.
pub fn run(
    world: &mut World,
    players: &mut [PlayerState; 2],
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    let ctx = build_context(world, &players[PlayerId::Two.index()]);
    let actions = wardkeep_ai::plan(&ctx, rng);
    for action in actions {
        apply(world, players, rng, events, action);
    }
}

fn build_context(world: &World, opponent: &PlayerState) -> OpponentContext {
    let mut worker = None;
    let mut combatants = Vec::new();
    let mut enemy_units = Vec::new();

    for (entity, (unit, owner, pos)) in world.query::<(&Unit, &Owner, &Position)>().iter() {
        let actor = ActorRef {
            id: entity.to_bits().get(),
            position: *pos,
        };
        match owner.0 {
            PlayerId::Two => {
                if unit.kind.is_worker() {
                    if worker.is_none() {
                        worker = Some(actor);
                    }
                } else {
                    combatants.push(actor);
                }
            }
            PlayerId::One => enemy_units.push(actor),
        }
    }

    let nodes = world
        .query::<(&ResourceNode, &Position)>()
        .iter()
        .map(|(entity, (node, pos))| NodeRef {
            id: entity.to_bits().get(),
            position: *pos,
            depleted: node.depleted,
        })
        .collect();

    OpponentContext {
        minerals: opponent.minerals,
        melee_cost: UNIT_COST,
        worker,
        nodes,
        combatants,
        enemy_units,
    }
}

fn apply(
    world: &mut World,
    players: &mut [PlayerState; 2],
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    action: OpponentAction,
) {
    match action {
        OpponentAction::Harvest { worker, node } => {
            let (Some(worker), Some(node)) = (Entity::from_bits(worker), Entity::from_bits(node))
            else {
                return;
            };
            if !world.contains(node) {
                return;
            }
            if let Ok(mut order) = world.get::<&mut Order>(worker) {
                *order = Order::Harvest { node };
            }
        }
        OpponentAction::TrainMelee => {
            let opponent = &players[PlayerId::Two.index()];
            let melee = opponent.race.basic_melee();
            let building = world
                .query::<(&Building, &Owner)>()
                .iter()
                .find(|(_, (building, owner))| {
                    owner.0 == PlayerId::Two && production::can_train(building.kind, melee)
                })
                .map(|(entity, _)| entity);
            if let Some(building) = building {
                production::train_unit(
                    world,
                    &mut players[PlayerId::Two.index()],
                    building,
                    melee,
                    rng,
                    events,
                );
            }
        }
        OpponentAction::Assault { attacker, target } => {
            let (Some(attacker), Some(target)) =
                (Entity::from_bits(attacker), Entity::from_bits(target))
            else {
                return;
            };
            if !world.contains(target) {
                return;
            }
            if let Ok(mut order) = world.get::<&mut Order>(attacker) {
                *order = Order::Attack { target };
            }
        }
    }
}
