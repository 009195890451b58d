//! RTS skirmish engine for WARDKEEP.
//!
//! A heavily simplified real-time-strategy demo: two players, a
//! handful of units and buildings, mineral nodes, drag selection,
//! right-click orders, and a schedule-driven computer opponent
//! (wardkeep-ai). Same engine shape as the tower-defense games: a hecs
//! world, a command queue drained at tick boundaries, systems in fixed
//! order, and a serializable snapshot per tick.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod engine;
pub mod enums;
pub mod events;
pub mod opponent;
pub mod player;
pub mod present;
pub mod state;
pub mod systems;
pub mod world_setup;

pub use wardkeep_core as core;

pub use commands::PlayerCommand;
pub use engine::SkirmishEngine;
pub use state::GameStateSnapshot;
