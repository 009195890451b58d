//! Raw input event → engine command translation.
//!
//! One translator per game. Translators are the only stateful part of
//! the input path: the defense one tracks the last seen phase (a click
//! places a tower during a build phase but shoots during a fight), the
//! skirmish one tracks the cursor so keyboard commands have a position.

use wardkeep_core::input::{InputEvent, Key, MouseButton};
use wardkeep_core::types::Position;

use wardkeep_defense::enums::GamePhase;

use wardkeep_skirmish::enums::{BuildingKind, UnitKind};

/// Translator for both tower-defense variants.
#[derive(Debug, Default)]
pub struct DefenseControls {
    phase: GamePhase,
}

impl DefenseControls {
    /// Track the engine's phase from the latest snapshot.
    pub fn observe(&mut self, snapshot: &wardkeep_defense::GameStateSnapshot) {
        self.phase = snapshot.phase;
    }

    pub fn translate(&self, event: &InputEvent) -> Option<wardkeep_defense::PlayerCommand> {
        use wardkeep_defense::PlayerCommand;
        match *event {
            InputEvent::MouseDown {
                button: MouseButton::Left,
                at,
                ..
            } => match self.phase {
                GamePhase::Build => Some(PlayerCommand::PlaceTower { at }),
                GamePhase::Defend => Some(PlayerCommand::Shoot { target: at }),
                _ => None,
            },
            InputEvent::KeyDown { key: Key::R } if self.phase.is_over() => {
                Some(PlayerCommand::Restart)
            }
            _ => None,
        }
    }
}

/// Translator for the skirmish game.
#[derive(Debug, Default)]
pub struct SkirmishControls {
    /// Last seen cursor position; key commands anchor to it.
    cursor: Position,
}

impl SkirmishControls {
    pub fn translate(&mut self, event: &InputEvent) -> Option<wardkeep_skirmish::PlayerCommand> {
        use wardkeep_skirmish::PlayerCommand;
        match *event {
            InputEvent::MouseDown {
                button: MouseButton::Left,
                at,
                modifiers,
            } => {
                self.cursor = at;
                Some(PlayerCommand::SelectPress {
                    at,
                    additive: modifiers.ctrl,
                })
            }
            InputEvent::MouseUp {
                button: MouseButton::Left,
                at,
                modifiers,
            } => {
                self.cursor = at;
                Some(PlayerCommand::SelectRelease {
                    at,
                    additive: modifiers.ctrl,
                })
            }
            InputEvent::MouseDown {
                button: MouseButton::Right,
                at,
                ..
            } => {
                self.cursor = at;
                Some(PlayerCommand::CommandAt { at })
            }
            InputEvent::MouseUp {
                button: MouseButton::Right,
                ..
            } => None,
            InputEvent::KeyDown { key: Key::B } => Some(PlayerCommand::PlaceBuilding {
                kind: BuildingKind::Barracks,
                at: self.cursor,
            }),
            InputEvent::KeyDown { key: Key::T } => Some(PlayerCommand::Train {
                kind: UnitKind::Marine,
            }),
            _ => None,
        }
    }
}
