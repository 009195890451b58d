//! Platform layer for the WARDKEEP games.
//!
//! Hosts the fixed-rate game loop (the clock collaborator), the
//! raw-input → command translators, and the headless demo binary.
//! Engines stay platform-free; everything time- and input-shaped
//! lives here.

pub mod driver;
pub mod input;
