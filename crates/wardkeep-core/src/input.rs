//! Raw input events delivered by the input collaborator.
//!
//! The platform layer polls all events accumulated since the last tick,
//! in order, and hands them to a per-game translator that turns them
//! into engine commands. The engines themselves never see raw input.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Mouse buttons the games care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
}

/// Keys the games care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Restart after a round ends.
    R,
    /// Place a building (skirmish).
    B,
    /// Train a unit (skirmish).
    T,
}

/// Modifier state captured alongside each mouse event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
}

/// A discrete input event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// Window close requested.
    Quit,
    MouseDown {
        button: MouseButton,
        at: Position,
        modifiers: Modifiers,
    },
    MouseUp {
        button: MouseButton,
        at: Position,
        modifiers: Modifiers,
    },
    KeyDown {
        key: Key,
    },
}
