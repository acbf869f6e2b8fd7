//! Card message handling

use sunseeker_zone_card_core::services::{CardEditor, ChangeOutcome, ValueChange};
use sunseeker_zone_card_core::types::{format_number, Control};

use crate::message::CardMessage;
use crate::model::{self, App, CursorTarget, NumberInput};

pub fn update(app: &mut App, msg: CardMessage) {
    match msg {
        CardMessage::SelectPrevious => {
            let targets = app.targets();
            app.cursor.select_previous(&targets);
        }
        CardMessage::SelectNext => {
            let targets = app.targets();
            app.cursor.select_next(&targets);
        }
        CardMessage::Confirm => confirm(app),
        CardMessage::CyclePrevious => cycle(app, false),
        CardMessage::CycleNext => cycle(app, true),
        CardMessage::ToggleSwitch => {
            if let Some((entity_id, Control::Toggle { on })) = current_control(app) {
                apply_change(app, &entity_id, ValueChange::Switch(!on));
            }
        }
        CardMessage::InputChar(c) => input_char(app, c),
        CardMessage::InputBackspace => {
            if let Some(input) = app.number_input.as_mut() {
                input.text.pop();
                if input.text.is_empty() {
                    app.number_input = None;
                }
            }
        }
        CardMessage::EnterEdit => {
            if app.card.config().is_none() {
                app.set_status("Card not configured, press c");
            } else if app.card.enter_edit() {
                app.set_status("Editing: changes are staged until submit");
            }
        }
        CardMessage::Submit => {
            if app.card.is_editing() {
                let sent = app.card.commit_edit();
                app.set_status(format!("Submitted {sent} changes"));
            }
        }
        CardMessage::Cancel => {
            if app.number_input.take().is_some() {
                app.set_status("Input discarded");
            } else if app.card.is_editing() {
                let discarded = app.card.cancel_edit();
                app.set_status(format!("Discarded {discarded} staged changes"));
            }
        }
        CardMessage::ToggleCard => {
            app.card.toggle_card();
        }
        CardMessage::NextZoneEntity => next_zone_entity(app),
    }
}

/// Swap the zone list for the next `select` entity, on this card only
fn next_zone_entity(app: &mut App) {
    if !app.card.can_pick_zone_entity() {
        app.set_status("Zone entity is fixed, set editable to pick it here");
        return;
    }

    let candidates = CardEditor::candidates(&app.card.host_state().snapshot);
    let items: Vec<Option<&str>> = candidates.iter().map(|(id, _)| Some(id.as_str())).collect();
    let Some(next) = model::cycle(&items, app.card.zone_entity(), true).map(str::to_string) else {
        return;
    };

    if app.card.pick_zone_entity(&next) {
        app.set_status(format!("Showing zones of {next}"));
    }
}

/// Entity id and control under the cursor
fn current_control(app: &App) -> Option<(String, Control)> {
    let view = app.view()?;
    match app.cursor.current()? {
        CursorTarget::Switch(entity_id) => view
            .switch
            .as_ref()
            .filter(|switch| &switch.entity_id == entity_id)
            .map(|switch| (entity_id.clone(), Control::Toggle { on: switch.on })),
        CursorTarget::Row { entity_id, .. } => view
            .row(entity_id)
            .map(|row| (entity_id.clone(), row.control.clone())),
        CursorTarget::Zone(_) => None,
    }
}

fn confirm(app: &mut App) {
    if let Some(input) = app.number_input.take() {
        apply_change(app, &input.entity_id, ValueChange::Number(input.text));
        return;
    }

    if let Some(CursorTarget::Zone(zone)) = app.cursor.current().cloned() {
        app.card.toggle_zone(&zone);
        return;
    }

    if let Some((entity_id, Control::Toggle { on })) = current_control(app) {
        apply_change(app, &entity_id, ValueChange::Switch(!on));
    }
}

fn cycle(app: &mut App, forward: bool) {
    if let Some(CursorTarget::Zone(zone)) = app.cursor.current().cloned() {
        // Left collapses, right expands
        if app.card.is_zone_collapsed(&zone) == forward {
            app.card.toggle_zone(&zone);
        }
        return;
    }

    let Some((entity_id, control)) = current_control(app) else {
        return;
    };
    let change = match control {
        Control::Choice { options, selected } => {
            if options.is_empty() {
                return;
            }
            let len = options.len();
            let next = match options.iter().position(|option| option.value == selected) {
                Some(position) if forward => (position + 1) % len,
                Some(position) => (position + len - 1) % len,
                None => 0,
            };
            ValueChange::Option(options[next].value.clone())
        }
        Control::Number { value, min, max, step, .. } => {
            let current = value.trim().parse::<f64>().unwrap_or(min);
            let stepped = if forward { current + step } else { current - step };
            let stepped = if min <= max { stepped.clamp(min, max) } else { stepped };
            ValueChange::Number(format_number(stepped))
        }
        Control::Toggle { on } => ValueChange::Switch(!on),
        Control::Readout { .. } => return,
    };

    app.number_input = None;
    apply_change(app, &entity_id, change);
}

fn input_char(app: &mut App, c: char) {
    let Some((entity_id, Control::Number { .. })) = current_control(app) else {
        return;
    };

    match app.number_input.as_mut() {
        Some(input) if input.entity_id == entity_id => input.text.push(c),
        _ => {
            app.number_input = Some(NumberInput {
                entity_id,
                text: c.to_string(),
            });
        }
    }
}

fn apply_change(app: &mut App, entity_id: &str, change: ValueChange) {
    let message = match app.card.change_value(entity_id, change) {
        ChangeOutcome::Staged => {
            format!("Staged {entity_id} ({} pending)", app.card.staged_count())
        }
        ChangeOutcome::Dispatched => format!("Sent {entity_id}"),
        ChangeOutcome::Ignored => format!("Ignored invalid value for {entity_id}"),
    };
    app.set_status(message);
}
