use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use wardkeep_core::types::Position;

use crate::director::{plan, ActorRef, NodeRef, OpponentAction, OpponentContext};

fn worker_at(x: f32, y: f32) -> ActorRef {
    ActorRef {
        id: 1,
        position: Position::new(x, y),
    }
}

fn node(id: u64, x: f32, depleted: bool) -> NodeRef {
    NodeRef {
        id,
        position: Position::new(x, 0.0),
        depleted,
    }
}

#[test]
fn test_worker_sent_to_nearest_live_node() {
    let ctx = OpponentContext {
        worker: Some(worker_at(0.0, 0.0)),
        nodes: vec![node(10, 300.0, false), node(11, 100.0, false)],
        ..OpponentContext::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let actions = plan(&ctx, &mut rng);
    assert!(actions.contains(&OpponentAction::Harvest {
        worker: 1,
        node: 11
    }));
}

#[test]
fn test_depleted_nodes_are_skipped() {
    let ctx = OpponentContext {
        worker: Some(worker_at(0.0, 0.0)),
        nodes: vec![node(10, 100.0, true), node(11, 500.0, false)],
        ..OpponentContext::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let actions = plan(&ctx, &mut rng);
    assert!(actions.contains(&OpponentAction::Harvest {
        worker: 1,
        node: 11
    }));

    // Everything dry: no harvest order at all.
    let ctx = OpponentContext {
        worker: Some(worker_at(0.0, 0.0)),
        nodes: vec![node(10, 100.0, true)],
        ..OpponentContext::default()
    };
    let actions = plan(&ctx, &mut rng);
    assert!(actions.is_empty());
}

#[test]
fn test_no_worker_no_harvest() {
    let ctx = OpponentContext {
        nodes: vec![node(10, 100.0, false)],
        ..OpponentContext::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert!(plan(&ctx, &mut rng).is_empty());
}

#[test]
fn test_training_requires_minerals() {
    let ctx = OpponentContext {
        minerals: 40,
        melee_cost: 50,
        ..OpponentContext::default()
    };
    // Broke: never trains, regardless of the dice.
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        assert!(!plan(&ctx, &mut rng).contains(&OpponentAction::TrainMelee));
    }
}

#[test]
fn test_training_is_probability_gated() {
    let ctx = OpponentContext {
        minerals: 500,
        melee_cost: 50,
        ..OpponentContext::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let trained = (0..1000)
        .filter(|_| plan(&ctx, &mut rng).contains(&OpponentAction::TrainMelee))
        .count();
    // ~10% of turns; generous bounds to stay robust.
    assert!((40..250).contains(&trained), "trained {trained}/1000 turns");
}

#[test]
fn test_assault_waits_for_squad() {
    let enemy = ActorRef {
        id: 99,
        position: Position::new(500.0, 500.0),
    };
    let combatant = |id| ActorRef {
        id,
        position: Position::new(0.0, 0.0),
    };

    // Two combatants: below the threshold, no assault.
    let ctx = OpponentContext {
        combatants: vec![combatant(2), combatant(3)],
        enemy_units: vec![enemy],
        ..OpponentContext::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    assert!(plan(&ctx, &mut rng).is_empty());

    // Three combatants: a squad of two attacks the human unit.
    let ctx = OpponentContext {
        combatants: vec![combatant(2), combatant(3), combatant(4)],
        enemy_units: vec![enemy],
        ..OpponentContext::default()
    };
    let actions = plan(&ctx, &mut rng);
    let assaults: Vec<_> = actions
        .iter()
        .filter(|a| matches!(a, OpponentAction::Assault { .. }))
        .collect();
    assert_eq!(assaults.len(), 2);
    for action in assaults {
        let OpponentAction::Assault { attacker, target } = action else {
            unreachable!();
        };
        assert!([2, 3, 4].contains(attacker));
        assert_eq!(*target, 99);
    }
}

#[test]
fn test_no_assault_without_enemy_units() {
    let combatant = |id| ActorRef {
        id,
        position: Position::new(0.0, 0.0),
    };
    let ctx = OpponentContext {
        combatants: vec![combatant(2), combatant(3), combatant(4)],
        enemy_units: vec![],
        ..OpponentContext::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    assert!(plan(&ctx, &mut rng).is_empty());
}
