//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Event kind and state are ignored. Terminals disagree about reporting
    /// SHIFT for symbols such as `+` and `?`, so SHIFT is dropped for
    /// non-alphabetic characters.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&normalize(key)).copied()
    }
}

fn normalize(key: KeyEvent) -> KeyEvent {
    let modifiers = match key.code {
        KeyCode::Char(c) if !c.is_alphabetic() => key.modifiers.difference(KeyModifiers::SHIFT),
        _ => key.modifiers,
    };
    KeyEvent::new(key.code, modifiers)
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, KeyModifiers::NONE), action);
        };

        // Scrolling
        bind(KeyCode::Char(' '), KeyAction::ToggleRunning);
        bind(KeyCode::Char('r'), KeyAction::Reset);
        bind(KeyCode::Up, KeyAction::SpeedUp);
        bind(KeyCode::Down, KeyAction::SpeedDown);

        // Appearance
        bind(KeyCode::Char('+'), KeyAction::FontUp);
        bind(KeyCode::Char('='), KeyAction::FontUp);
        bind(KeyCode::Char('-'), KeyAction::FontDown);
        bind(KeyCode::F(11), KeyAction::ToggleFullscreen);
        bind(KeyCode::Char('f'), KeyAction::ToggleFullscreen);
        bind(KeyCode::Char('s'), KeyAction::ToggleShadow);
        bind(KeyCode::Char('t'), KeyAction::ChooseTextColor);
        bind(KeyCode::Char('b'), KeyAction::ChooseBgColor);

        // Script
        bind(KeyCode::Char('o'), KeyAction::OpenFile);
        bind(KeyCode::Char('e'), KeyAction::Edit);

        // Application controls
        bind(KeyCode::Char('?'), KeyAction::Help);
        bind(KeyCode::Char('q'), KeyAction::Quit);

        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}
