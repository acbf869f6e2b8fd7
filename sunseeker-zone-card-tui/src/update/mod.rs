//! Update layer: apply messages to the model

mod card;
mod editor;

use sunseeker_zone_card_core::types::CardConfig;

use crate::message::AppMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Card(card_msg) => {
            card::update(app, card_msg);
        }

        AppMessage::Editor(editor_msg) => {
            editor::update(app, editor_msg);
        }

        AppMessage::OpenEditor => {
            let config = app
                .card
                .config()
                .cloned()
                .unwrap_or_else(|| CardConfig::new(""));
            app.open_editor(config);
        }

        AppMessage::Reload => match app.host.reload() {
            Ok(count) => app.set_status(format!("Reloaded {count} entities")),
            Err(e) => {
                tracing::error!("Snapshot reload failed: {e:#}");
                app.set_status(format!("{e:#}"));
            }
        },

        AppMessage::Noop => {}
    }

    // Dispatched commands bump the host generation
    app.sync_host();
    app.sync_cursor();
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::message::{CardMessage, EditorMessage};
    use crate::model::CursorTarget;
    use crate::test_utils::{configured_app, demo_app, ZONE_LIST};
    use sunseeker_zone_card_core::services::EditorField;
    use sunseeker_zone_card_core::types::Control;
    use sunseeker_zone_card_core::StateProvider;

    fn card(app: &mut App, msg: CardMessage) {
        update(app, AppMessage::Card(msg));
    }

    fn editor(app: &mut App, msg: EditorMessage) {
        update(app, AppMessage::Editor(msg));
    }

    fn row_control<'a>(app: &'a App, entity_id: &str) -> &'a Control {
        &app.view().unwrap().row(entity_id).unwrap().control
    }

    /// Expand "Front lawn" and move onto its first row
    fn open_front_lawn(app: &mut App) {
        assert_eq!(app.cursor.current(), Some(&CursorTarget::Zone("Front lawn".into())));
        card(app, CardMessage::Confirm);
        card(app, CardMessage::SelectNext);
    }

    fn move_to(app: &mut App, entity_id: &str) {
        for _ in 0..10 {
            if app.cursor.current().and_then(CursorTarget::entity_id) == Some(entity_id) {
                break;
            }
            card(app, CardMessage::SelectNext);
        }
        assert_eq!(app.cursor.current().and_then(CursorTarget::entity_id), Some(entity_id));
    }

    #[test]
    fn starts_on_first_zone_header() {
        let app = configured_app();
        let view = app.view().unwrap();

        let names: Vec<&str> = view.zones.iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, vec!["Front lawn", "Back yard", "Side strip"]);
        assert!(app.editor.is_none());
        assert_eq!(app.cursor.current(), Some(&CursorTarget::Zone("Front lawn".into())));
    }

    #[test]
    fn missing_config_opens_editor() {
        let app = demo_app(None);
        assert!(app.editor.is_some());
        assert!(app.view().is_none());
    }

    #[test]
    fn enter_on_zone_expands_it() {
        let mut app = configured_app();
        open_front_lawn(&mut app);

        assert!(!app.view().unwrap().zone("Front lawn").unwrap().collapsed);
        assert!(matches!(app.cursor.current(), Some(CursorTarget::Row { .. })));
    }

    #[test]
    fn viewing_changes_reach_the_host() {
        let mut app = configured_app();
        open_front_lawn(&mut app);
        move_to(&mut app, "select.mower_front_lawn_speed");

        card(&mut app, CardMessage::CycleNext);

        assert!(matches!(
            row_control(&app, "select.mower_front_lawn_speed"),
            Control::Choice { selected, .. } if selected == "Fast"
        ));
        assert_eq!(
            app.cursor.current().and_then(CursorTarget::entity_id),
            Some("select.mower_front_lawn_speed")
        );
    }

    #[test]
    fn number_steps_clamp_to_bounds() {
        let mut app = configured_app();
        open_front_lawn(&mut app);
        move_to(&mut app, "number.mower_front_lawn_cutting_height");

        for _ in 0..10 {
            card(&mut app, CardMessage::CycleNext);
        }

        assert_eq!(
            row_control(&app, "number.mower_front_lawn_cutting_height").display_value(),
            "6 cm"
        );
    }

    #[test]
    fn typed_number_is_staged_while_editing() {
        let mut app = configured_app();
        open_front_lawn(&mut app);
        move_to(&mut app, "number.mower_front_lawn_cutting_height");
        card(&mut app, CardMessage::EnterEdit);

        for c in "3.5".chars() {
            card(&mut app, CardMessage::InputChar(c));
        }
        card(&mut app, CardMessage::Confirm);

        assert_eq!(app.card.staged_count(), 1);
        let host_state = app.host.host_state();
        let height = host_state.snapshot.get("number.mower_front_lawn_cutting_height").unwrap();
        assert_eq!(height.state, "4");

        card(&mut app, CardMessage::Submit);

        assert!(!app.card.is_editing());
        assert_eq!(
            row_control(&app, "number.mower_front_lawn_cutting_height").display_value(),
            "3.5 cm"
        );
    }

    #[test]
    fn cancel_drops_typed_input_first() {
        let mut app = configured_app();
        open_front_lawn(&mut app);
        move_to(&mut app, "number.mower_front_lawn_cutting_height");
        card(&mut app, CardMessage::EnterEdit);
        card(&mut app, CardMessage::CycleNext);
        card(&mut app, CardMessage::InputChar('5'));

        card(&mut app, CardMessage::Cancel);
        assert!(app.number_input.is_none());
        assert!(app.card.is_editing());

        card(&mut app, CardMessage::Cancel);
        assert!(!app.card.is_editing());
        assert_eq!(app.card.staged_count(), 0);
    }

    #[test]
    fn invalid_typed_number_is_ignored() {
        let mut app = configured_app();
        open_front_lawn(&mut app);
        move_to(&mut app, "number.mower_front_lawn_cutting_height");

        card(&mut app, CardMessage::InputChar('-'));
        card(&mut app, CardMessage::InputChar('.'));
        card(&mut app, CardMessage::Confirm);

        assert!(app.status_message.as_deref().unwrap().starts_with("Ignored"));
        assert_eq!(
            row_control(&app, "number.mower_front_lawn_cutting_height").display_value(),
            "4 cm"
        );
    }

    #[test]
    fn collapsed_card_has_no_targets() {
        let mut app = configured_app();
        card(&mut app, CardMessage::ToggleCard);

        assert!(app.view().unwrap().collapsed);
        assert!(app.cursor.current().is_none());

        card(&mut app, CardMessage::ToggleCard);
        assert_eq!(app.cursor.current(), Some(&CursorTarget::Zone("Front lawn".into())));
    }

    #[test]
    fn zone_list_is_fixed_without_editable() {
        let mut app = configured_app();
        card(&mut app, CardMessage::NextZoneEntity);

        assert_eq!(app.card.zone_entity(), Some(ZONE_LIST));
        assert!(app.status_message.as_deref().unwrap().starts_with("Zone entity is fixed"));
    }

    #[test]
    fn editable_card_swaps_zone_list_without_saving() {
        let mut config = CardConfig::new(ZONE_LIST);
        config.editable = true;
        let mut app = demo_app(Some(config));

        card(&mut app, CardMessage::NextZoneEntity);

        assert_eq!(app.card.zone_entity(), Some("select.mower_back_yard_path_width"));
        let view = app.view().unwrap();
        assert!(view.zone("Front lawn").is_none());
        assert!(view.zone("Narrow").is_some());
        assert_eq!(app.cursor.current(), Some(&CursorTarget::Zone("Narrow".into())));
        assert_eq!(app.config_store.load().unwrap().unwrap().entity, ZONE_LIST);
    }

    #[test]
    fn editor_configures_card_from_scratch() {
        let mut app = demo_app(None);

        // Cycle to the zone-list entity among the select candidates
        for _ in 0..10 {
            if app.card.config().is_some_and(|c| c.entity == ZONE_LIST) {
                break;
            }
            editor(&mut app, EditorMessage::CycleNext);
        }
        assert_eq!(app.card.config().unwrap().entity, ZONE_LIST);

        editor(&mut app, EditorMessage::FocusNext);
        editor(&mut app, EditorMessage::InputChar('!'));
        assert_eq!(app.card.config().unwrap().header, "Zones!");
        assert_eq!(app.config_store.load().unwrap().unwrap().header, "Zones!");

        editor(&mut app, EditorMessage::Close);
        assert!(app.editor.is_none());
        assert_eq!(app.view().unwrap().header, "Zones!");
    }

    #[test]
    fn header_focus_is_restored_after_edit() {
        let mut app = configured_app();
        update(&mut app, AppMessage::OpenEditor);
        editor(&mut app, EditorMessage::FocusNext);
        editor(&mut app, EditorMessage::CyclePrevious);
        editor(&mut app, EditorMessage::CyclePrevious);
        editor(&mut app, EditorMessage::InputChar('X'));

        let state = app.editor.as_ref().unwrap();
        assert_eq!(state.field, EditorField::Header);
        assert_eq!(state.editor.header_input(), "ZonXes");
        assert_eq!(state.header_cursor, 4);
    }

    #[test]
    fn clearing_header_emits_default() {
        let mut app = configured_app();
        update(&mut app, AppMessage::OpenEditor);
        editor(&mut app, EditorMessage::FocusNext);
        for _ in 0.."Zones".len() {
            editor(&mut app, EditorMessage::Backspace);
        }

        assert_eq!(app.editor.as_ref().unwrap().editor.header_input(), "");
        assert_eq!(app.card.config().unwrap().header, "Zones");
    }

    #[test]
    fn companion_switch_can_be_picked_and_toggled() {
        let mut app = configured_app();
        update(&mut app, AppMessage::OpenEditor);
        editor(&mut app, EditorMessage::FocusNext);
        editor(&mut app, EditorMessage::FocusNext);
        for _ in 0..5 {
            let switch = app.card.config().unwrap().switch_entity.clone();
            if switch.as_deref() == Some("switch.mower_rain_delay") {
                break;
            }
            editor(&mut app, EditorMessage::CycleNext);
        }
        editor(&mut app, EditorMessage::Close);

        // The cursor stays on its zone; the switch row sits above it
        assert_eq!(app.cursor.current(), Some(&CursorTarget::Zone("Front lawn".into())));
        card(&mut app, CardMessage::SelectPrevious);
        assert_eq!(
            app.cursor.current(),
            Some(&CursorTarget::Switch("switch.mower_rain_delay".into()))
        );
        card(&mut app, CardMessage::ToggleSwitch);
        assert!(app.view().unwrap().switch.as_ref().unwrap().on);
    }
}
