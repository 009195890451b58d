//! Opponent decision logic.
//!
//! Schedule-driven pseudo-AI, not a planner: the engine calls [`plan`]
//! once per decision interval and each call is independent. Three
//! gated actions per call: keep the worker harvesting, sometimes train
//! a melee unit, and once a few combatants exist, throw a random squad
//! at random human units.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use wardkeep_core::types::Position;

/// Probability of training a melee unit on any given decision turn.
pub const TRAIN_PROBABILITY: f64 = 0.1;

/// Combatants required before assaults begin.
pub const ASSAULT_THRESHOLD: usize = 2;

/// Maximum attackers re-tasked per decision turn.
pub const ASSAULT_SQUAD: usize = 2;

/// A mobile actor in the opponent's view of the world. The id is an
/// opaque engine handle.
#[derive(Debug, Clone, Copy)]
pub struct ActorRef {
    pub id: u64,
    pub position: Position,
}

/// A resource node in the opponent's view of the world.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef {
    pub id: u64,
    pub position: Position,
    pub depleted: bool,
}

/// Everything the opponent can see on one decision turn.
#[derive(Debug, Clone, Default)]
pub struct OpponentContext {
    pub minerals: u32,
    /// Cost of the basic melee unit.
    pub melee_cost: u32,
    /// The opponent's worker, if it still lives.
    pub worker: Option<ActorRef>,
    /// All resource nodes on the map.
    pub nodes: Vec<NodeRef>,
    /// The opponent's non-worker units.
    pub combatants: Vec<ActorRef>,
    /// The human player's units.
    pub enemy_units: Vec<ActorRef>,
}

/// An action for the engine to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentAction {
    /// Send a worker to harvest a node.
    Harvest { worker: u64, node: u64 },
    /// Train the basic melee unit from the opponent's base.
    TrainMelee,
    /// Order one combatant to attack one human unit.
    Assault { attacker: u64, target: u64 },
}

/// Decide this turn's actions.
pub fn plan(ctx: &OpponentContext, rng: &mut ChaCha8Rng) -> Vec<OpponentAction> {
    let mut actions = Vec::new();

    if let Some(worker) = ctx.worker {
        if let Some(node) = nearest_live_node(&worker.position, &ctx.nodes) {
            actions.push(OpponentAction::Harvest {
                worker: worker.id,
                node: node.id,
            });
        }
    }

    if ctx.minerals >= ctx.melee_cost && rng.gen_bool(TRAIN_PROBABILITY) {
        actions.push(OpponentAction::TrainMelee);
    }

    if ctx.combatants.len() > ASSAULT_THRESHOLD && !ctx.enemy_units.is_empty() {
        let squad = ASSAULT_SQUAD.min(ctx.combatants.len());
        for index in rand::seq::index::sample(rng, ctx.combatants.len(), squad) {
            let target = &ctx.enemy_units[rng.gen_range(0..ctx.enemy_units.len())];
            actions.push(OpponentAction::Assault {
                attacker: ctx.combatants[index].id,
                target: target.id,
            });
        }
    }

    actions
}

/// Nearest undepleted node to a point, or `None` if all are dry.
fn nearest_live_node<'a>(from: &Position, nodes: &'a [NodeRef]) -> Option<&'a NodeRef> {
    nodes
        .iter()
        .filter(|node| !node.depleted)
        .min_by(|a, b| {
            from.distance_to(&a.position)
                .total_cmp(&from.distance_to(&b.position))
        })
}
