//! Key mapping from terminal events to game input.

use crate::types::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys that stay active while held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldKey {
    Left,
    Right,
    Down,
}

impl HoldKey {
    pub(crate) fn index(self) -> usize {
        match self {
            HoldKey::Left => 0,
            HoldKey::Right => 1,
            HoldKey::Down => 2,
        }
    }
}

/// What a key does in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBinding {
    /// Fires once on key-down
    Press(InputEvent),
    /// Active from key-down until key-up
    Hold(HoldKey),
}

/// Map a key code to its binding. Bindings are fixed.
pub fn binding_for(code: KeyCode) -> Option<KeyBinding> {
    match code {
        KeyCode::Left => Some(KeyBinding::Hold(HoldKey::Left)),
        KeyCode::Right => Some(KeyBinding::Hold(HoldKey::Right)),
        KeyCode::Down => Some(KeyBinding::Hold(HoldKey::Down)),

        KeyCode::Up => Some(KeyBinding::Press(InputEvent::Rotate)),
        KeyCode::Char('0') => Some(KeyBinding::Press(InputEvent::LevelSkip)),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
