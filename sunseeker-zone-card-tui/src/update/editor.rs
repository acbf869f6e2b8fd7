//! Configuration editor message handling
//!
//! Every field change emits the complete configuration, which is saved and
//! handed to the card right away.

use sunseeker_zone_card_core::services::{CardEditor, EditorField};
use sunseeker_zone_card_core::types::{CardConfig, Snapshot};

use crate::message::EditorMessage;
use crate::model::{cycle, switch_candidates, App, EditorState};

pub fn update(app: &mut App, msg: EditorMessage) {
    let Some(mut state) = app.editor.take() else {
        return;
    };
    let snapshot = app.card.host_state().snapshot.clone();

    let emitted = match msg {
        EditorMessage::FocusNext => {
            state.focus_next();
            None
        }
        EditorMessage::FocusPrevious => {
            state.focus_previous();
            None
        }
        EditorMessage::CyclePrevious => cycle_field(&mut state, &snapshot, false),
        EditorMessage::CycleNext => cycle_field(&mut state, &snapshot, true),
        EditorMessage::InputChar(c) => input_char(&mut state, c),
        EditorMessage::Backspace => backspace(&mut state),
        EditorMessage::Confirm => {
            if state.field == EditorField::CollapsedCard {
                Some(state.editor.toggle_collapsed_card())
            } else {
                state.focus_next();
                None
            }
        }
        EditorMessage::Close => {
            if app.card.config().is_none() {
                app.set_status("Card not configured, press c");
            } else {
                app.clear_status();
            }
            return;
        }
    };

    if let Some(config) = emitted {
        apply_config(app, &snapshot, config);
        if let Some(focus) = state.editor.take_pending_focus() {
            if focus.field == EditorField::Header {
                state.header_cursor = focus.selection.1;
            }
        }
    }
    app.editor = Some(state);
}

fn cycle_field(state: &mut EditorState, snapshot: &Snapshot, forward: bool) -> Option<CardConfig> {
    match state.field {
        EditorField::Entity => {
            let candidates = CardEditor::candidates(snapshot);
            let ids: Vec<Option<&str>> =
                candidates.iter().map(|(id, _)| Some(id.as_str())).collect();
            let current = state.editor.config().entity.clone();
            let next = cycle(&ids, Some(current.as_str()), forward)?;
            Some(state.editor.select_entity(next))
        }
        EditorField::SwitchEntity => {
            let candidates = switch_candidates(snapshot);
            let ids: Vec<Option<&str>> = std::iter::once(None)
                .chain(candidates.iter().map(|(id, _)| Some(id.as_str())))
                .collect();
            let current = state.editor.config().switch_entity.clone();
            let next = cycle(&ids, current.as_deref(), forward);
            Some(state.editor.set_switch_entity(next))
        }
        EditorField::Header => {
            let len = state.editor.header_input().chars().count();
            state.header_cursor = if forward {
                (state.header_cursor + 1).min(len)
            } else {
                state.header_cursor.saturating_sub(1)
            };
            None
        }
        EditorField::SwitchName => None,
        EditorField::CollapsedCard => Some(state.editor.toggle_collapsed_card()),
    }
}

fn input_char(state: &mut EditorState, c: char) -> Option<CardConfig> {
    match state.field {
        EditorField::Header => {
            let mut chars: Vec<char> = state.editor.header_input().chars().collect();
            let at = state.header_cursor.min(chars.len());
            chars.insert(at, c);
            let text: String = chars.into_iter().collect();
            Some(state.editor.set_header(&text, (at + 1, at + 1)))
        }
        EditorField::SwitchName => {
            state.switch_name.push(c);
            Some(state.editor.set_switch_name(Some(&state.switch_name)))
        }
        EditorField::CollapsedCard if c == ' ' => Some(state.editor.toggle_collapsed_card()),
        _ => None,
    }
}

fn backspace(state: &mut EditorState) -> Option<CardConfig> {
    match state.field {
        EditorField::Header if state.header_cursor > 0 => {
            let mut chars: Vec<char> = state.editor.header_input().chars().collect();
            let at = state.header_cursor.min(chars.len()).saturating_sub(1);
            if at < chars.len() {
                chars.remove(at);
            }
            let text: String = chars.into_iter().collect();
            Some(state.editor.set_header(&text, (at, at)))
        }
        EditorField::SwitchName => {
            state.switch_name.pop();
            Some(state.editor.set_switch_name(Some(&state.switch_name)))
        }
        _ => None,
    }
}

fn apply_config(app: &mut App, snapshot: &Snapshot, config: CardConfig) {
    if let Err(e) = app.config_store.save(&config) {
        tracing::error!("Failed to save card configuration: {e}");
        app.set_status(format!("Could not save configuration: {e}"));
        return;
    }

    let checked = config.check_entities(snapshot);
    match (app.card.set_config(config), checked) {
        (Err(e), _) | (Ok(()), Err(e)) => app.set_status(e.to_string()),
        (Ok(()), Ok(())) => app.clear_status(),
    }
}
