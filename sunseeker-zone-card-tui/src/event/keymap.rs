//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key binding
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// Whether a key event matches this binding
    ///
    /// Shift is ignored for characters since it is already part of the
    /// character (`C` vs `c`).
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// Default key bindings
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const RELOAD: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const OPEN_EDITOR: KeyBinding = KeyBinding::key(KeyCode::Char('c'));
    pub const TOGGLE_CARD: KeyBinding = KeyBinding::key(KeyCode::Char('C'));
    pub const NEXT_ZONE_ENTITY: KeyBinding = KeyBinding::key(KeyCode::Char('z'));

    // Navigation
    pub const NAV_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const NAV_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const NAV_CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const CYCLE_PREV: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const CYCLE_NEXT: KeyBinding = KeyBinding::key(KeyCode::Right);

    // Values
    pub const TOGGLE_SWITCH: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
    pub const BACKSPACE: KeyBinding = KeyBinding::key(KeyCode::Backspace);

    // Edit mode
    pub const EDIT: KeyBinding = KeyBinding::key(KeyCode::Char('e'));
    pub const SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Char('s'));
    pub const CANCEL: KeyBinding = KeyBinding::key(KeyCode::Esc);
}
