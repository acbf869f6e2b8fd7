//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, CardMessage, EditorMessage};
use crate::model::App;

/// Poll for one terminal event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate an event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize redraws on the next loop iteration
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Press only; release and repeat events would double every key on Windows
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.editor.is_some() {
        return handle_editor_keys(key).map_or(AppMessage::Noop, AppMessage::Editor);
    }

    handle_card_keys(key)
}

fn handle_card_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        AppMessage::Quit
    } else if DefaultKeymap::RELOAD.matches(&key) {
        AppMessage::Reload
    } else if DefaultKeymap::OPEN_EDITOR.matches(&key) {
        AppMessage::OpenEditor
    } else if DefaultKeymap::TOGGLE_CARD.matches(&key) {
        AppMessage::Card(CardMessage::ToggleCard)
    } else if DefaultKeymap::NEXT_ZONE_ENTITY.matches(&key) {
        AppMessage::Card(CardMessage::NextZoneEntity)
    } else if DefaultKeymap::NAV_UP.matches(&key) {
        AppMessage::Card(CardMessage::SelectPrevious)
    } else if DefaultKeymap::NAV_DOWN.matches(&key) {
        AppMessage::Card(CardMessage::SelectNext)
    } else if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        AppMessage::Card(CardMessage::Confirm)
    } else if DefaultKeymap::CYCLE_PREV.matches(&key) {
        AppMessage::Card(CardMessage::CyclePrevious)
    } else if DefaultKeymap::CYCLE_NEXT.matches(&key) {
        AppMessage::Card(CardMessage::CycleNext)
    } else if DefaultKeymap::TOGGLE_SWITCH.matches(&key) {
        AppMessage::Card(CardMessage::ToggleSwitch)
    } else if DefaultKeymap::BACKSPACE.matches(&key) {
        AppMessage::Card(CardMessage::InputBackspace)
    } else if DefaultKeymap::EDIT.matches(&key) {
        AppMessage::Card(CardMessage::EnterEdit)
    } else if DefaultKeymap::SUBMIT.matches(&key) {
        AppMessage::Card(CardMessage::Submit)
    } else if DefaultKeymap::CANCEL.matches(&key) {
        AppMessage::Card(CardMessage::Cancel)
    } else {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
                AppMessage::Card(CardMessage::InputChar(c))
            }
            _ => AppMessage::Noop,
        }
    }
}

fn handle_editor_keys(key: KeyEvent) -> Option<EditorMessage> {
    let msg = match key.code {
        KeyCode::Esc => EditorMessage::Close,
        KeyCode::Up | KeyCode::BackTab => EditorMessage::FocusPrevious,
        KeyCode::Down | KeyCode::Tab => EditorMessage::FocusNext,
        KeyCode::Left => EditorMessage::CyclePrevious,
        KeyCode::Right => EditorMessage::CycleNext,
        KeyCode::Enter => EditorMessage::Confirm,
        KeyCode::Backspace => EditorMessage::Backspace,
        KeyCode::Char(c) => EditorMessage::InputChar(c),
        _ => return None,
    };
    Some(msg)
}
