#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! End-to-end tests for `ZoneCard` driven through host snapshots in JSON form.

use std::sync::{Arc, Mutex};

use serde_json::json;
use sunseeker_zone_card_core::i18n::{translate_option, Language};
use sunseeker_zone_card_core::services::{
    derive_zones, match_entities, ChangeOutcome, ReconcileAction, ValueChange,
};
use sunseeker_zone_card_core::types::{CardConfig, Control, HostState, ServiceCall, Snapshot};
use sunseeker_zone_card_core::{CommandDispatcher, ZoneCard};

const ZONES: &str = "select.mower_1_zone";

// ===== Mock Implementations =====

#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<ServiceCall>>,
}

impl Recorder {
    fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandDispatcher for Recorder {
    fn dispatch(&self, call: &ServiceCall) {
        self.calls.lock().unwrap().push(call.clone());
    }
}

fn snapshot(zones: &[&str], speed: &str) -> Snapshot {
    serde_json::from_value(json!({
        ZONES: {
            "state": zones.first().copied().unwrap_or_default(),
            "attributes": { "friendly_name": "mower 1 front lawn", "options": zones }
        },
        "select.mower_1_front_lawn_speed": {
            "state": speed,
            "attributes": {
                "friendly_name": "Mower 1 Front lawn Speed",
                "options": ["Slow", "Normal", "Fast"]
            }
        },
        "number.mower_1_front_lawn_width": {
            "state": "20",
            "attributes": {
                "friendly_name": "Mower 1 Front lawn - Width",
                "min": 10, "max": 40, "step": 5, "unit_of_measurement": "cm"
            }
        },
        "switch.mower_1_front_lawn_edge": {
            "state": "off",
            "attributes": { "friendly_name": "Mower 1 Front lawn Edge" }
        },
        "select.mower_2_front_lawn_speed": {
            "state": "Slow",
            "attributes": {
                "friendly_name": "mower 2 front lawn speed",
                "options": ["Slow", "Fast"]
            }
        }
    }))
    .unwrap()
}

fn configured_card(language: &str) -> (ZoneCard, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let mut card = ZoneCard::new(recorder.clone());
    card.set_config(CardConfig::new(ZONES)).unwrap();
    card.update(HostState::new(
        snapshot(&["Front lawn", "Global"], "Normal"),
        Some(language.to_string()),
    ));
    (card, recorder)
}

#[test]
fn global_is_never_a_zone() {
    let snap = snapshot(&["Global", "Front lawn", "GLOBAL", "Back"], "Normal");
    assert_eq!(derive_zones(&snap, ZONES), vec!["Front lawn", "Back"]);
}

#[test]
fn prefix_excludes_other_mower() {
    let snap = snapshot(&["front lawn"], "Normal");

    let ids: Vec<&str> = match_entities(&snap, "front lawn", ZONES)
        .iter()
        .map(|e| e.entity_id.as_str())
        .collect();

    assert!(ids.contains(&"select.mower_1_front_lawn_speed"));
    assert!(!ids.contains(&"select.mower_2_front_lawn_speed"));
    assert_eq!(ids, {
        let again: Vec<&str> = match_entities(&snap, "front lawn", ZONES)
            .iter()
            .map(|e| e.entity_id.as_str())
            .collect();
        again
    });
}

#[test]
fn rendered_rows_use_after_zone_labels() {
    let (card, _) = configured_card("en");
    let view = card.view().unwrap();

    assert_eq!(view.zones.len(), 1);
    let labels: Vec<&str> = view.zones[0].rows.iter().map(|r| r.label.as_str()).collect();
    assert!(labels.contains(&"Speed"));
    assert!(labels.contains(&"Width"));
    assert!(labels.contains(&"Edge"));
}

#[test]
fn cancel_leaves_state_untouched() {
    let (mut card, recorder) = configured_card("en");

    card.enter_edit();
    card.change_value("select.mower_1_front_lawn_speed", ValueChange::Option("Fast".into()));
    assert_eq!(card.cancel_edit(), 1);

    assert!(recorder.calls().is_empty());
    assert_eq!(card.staged_count(), 0);
    let row = card.view().unwrap().row("select.mower_1_front_lawn_speed").unwrap();
    assert!(matches!(&row.control, Control::Choice { selected, .. } if selected == "Normal"));
}

#[test]
fn commit_dispatches_one_call_per_key() {
    let (mut card, recorder) = configured_card("en");

    card.enter_edit();
    card.change_value("select.mower_1_front_lawn_speed", ValueChange::Option("Fast".into()));
    card.change_value("select.mower_1_front_lawn_speed", ValueChange::Option("Slow".into()));
    card.change_value("number.mower_1_front_lawn_width", ValueChange::Number("25".into()));
    card.change_value("switch.mower_1_front_lawn_edge", ValueChange::Switch(true));

    assert_eq!(card.commit_edit(), 3);

    let calls = recorder.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.contains(&ServiceCall::select_option("select.mower_1_front_lawn_speed", "Slow")));
    assert!(calls.contains(&ServiceCall::set_value("number.mower_1_front_lawn_width", 25.0)));
    assert!(calls.contains(&ServiceCall::turn("switch.mower_1_front_lawn_edge", true)));
    assert!(!card.is_editing());
    assert_eq!(card.staged_count(), 0);
}

#[test]
fn background_update_never_drops_staged_edits() {
    let (mut card, _) = configured_card("en");
    card.enter_edit();
    card.change_value("number.mower_1_front_lawn_width", ValueChange::Number("30".into()));

    let same_count = card.update(HostState::new(
        snapshot(&["Front lawn", "Global"], "Fast"),
        Some("en".into()),
    ));
    let more_zones = card.update(HostState::new(
        snapshot(&["Front lawn", "Back", "Global"], "Fast"),
        Some("en".into()),
    ));

    assert_eq!(same_count, Some(ReconcileAction::Patch));
    assert_eq!(more_zones, Some(ReconcileAction::Patch));
    assert_eq!(card.staged_count(), 1);
    assert_eq!(card.view().unwrap().zones.len(), 1);

    card.cancel_edit();
    assert_eq!(card.view().unwrap().zones.len(), 2);
}

#[test]
fn zone_count_change_rebuilds_when_viewing() {
    let (mut card, _) = configured_card("en");

    let action = card.update(HostState::new(
        snapshot(&["Front lawn", "Back"], "Normal"),
        Some("en".into()),
    ));

    assert_eq!(action, Some(ReconcileAction::Rebuild));
    assert!(card.view().unwrap().zone("Back").unwrap().rows.is_empty());
}

#[test]
fn invalid_number_input_is_ignored() {
    let (mut card, recorder) = configured_card("en");

    let outcome =
        card.change_value("number.mower_1_front_lawn_width", ValueChange::Number("wide".into()));

    assert_eq!(outcome, ChangeOutcome::Ignored);
    assert!(recorder.calls().is_empty());
}

#[test]
fn unknown_language_and_option_fall_back() {
    assert_eq!(translate_option("Fast", Language::from_host(Some("xx"))), "Fast");
    assert_eq!(translate_option("Turbo", Language::De), "Turbo");

    let (card, _) = configured_card("xx-YY");
    assert_eq!(card.view().unwrap().buttons.edit, "Edit");
}

#[test]
fn translated_labels_keep_canonical_values() {
    let (mut card, recorder) = configured_card("fr-FR");
    let row = card.view().unwrap().row("select.mower_1_front_lawn_speed").unwrap();
    let Control::Choice { options, .. } = &row.control else {
        panic!("expected a choice control");
    };
    assert!(options.iter().any(|o| o.value == "Fast" && o.label != "Fast"));

    card.change_value("select.mower_1_front_lawn_speed", ValueChange::Option("Fast".into()));
    assert_eq!(
        recorder.calls(),
        vec![ServiceCall::select_option("select.mower_1_front_lawn_speed", "Fast")]
    );
}

#[test]
fn toggling_unknown_zone_is_noop() {
    let (mut card, _) = configured_card("en");
    let before = card.view().cloned();

    assert!(!card.toggle_zone("Pool"));
    assert_eq!(card.view().cloned(), before);
}
