//! Opponent controller for the WARDKEEP skirmish game.
//!
//! Pure functions that decide what the computer opponent does on each
//! of its turns, based on a plain-data view of the world. No ECS
//! dependency — the engine builds an [`OpponentContext`], applies the
//! returned actions, and owns all entity bookkeeping.

pub mod director;

pub use wardkeep_core as core;

pub use director::{plan, OpponentAction, OpponentContext};

#[cfg(test)]
mod tests;
