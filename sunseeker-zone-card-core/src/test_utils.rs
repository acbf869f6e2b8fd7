//! Test helpers
//!
//! A recording dispatcher and snapshot builders.

use std::sync::Mutex;

use crate::traits::CommandDispatcher;
use crate::types::{attr, Entity, ServiceCall, Snapshot};

/// Zone-list entity used across tests
pub const ZONE_LIST: &str = "select.mower_zone";

// ===== RecordingDispatcher =====

#[derive(Default)]
pub struct RecordingDispatcher {
    calls: Mutex<Vec<ServiceCall>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

impl CommandDispatcher for RecordingDispatcher {
    fn dispatch(&self, call: &ServiceCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call.clone());
        }
    }
}

// ===== Snapshot builders =====

/// Entity with a friendly name
pub fn labelled(entity_id: &str, state: &str, label: &str) -> Entity {
    Entity::new(entity_id, state).with_attribute(attr::FRIENDLY_NAME, label)
}

/// Snapshot holding only the zone-list entity
pub fn zone_list(zones: &[&str]) -> Snapshot {
    let mut snapshot = Snapshot::new();
    snapshot.insert(zone_list_entity(zones));
    snapshot
}

fn zone_list_entity(zones: &[&str]) -> Entity {
    labelled(ZONE_LIST, zones.first().copied().unwrap_or_default(), "Mower Zone")
        .with_attribute(attr::OPTIONS, zones.to_vec())
}

/// Two-zone mower: "Front lawn" and "Back yard", plus "Global"
pub fn mower_snapshot() -> Snapshot {
    let speeds = vec!["Slow", "Normal", "Fast"];

    let mut snapshot: Snapshot = [
        labelled("select.mower_front_lawn_speed", "Normal", "Mower Front lawn Speed")
            .with_attribute(attr::OPTIONS, speeds.clone()),
        labelled(
            "number.mower_front_lawn_cutting_height",
            "4",
            "Mower Front lawn Cutting height",
        )
        .with_attribute(attr::MIN, 2)
        .with_attribute(attr::MAX, 6)
        .with_attribute(attr::STEP, 0.5)
        .with_attribute(attr::UNIT, "cm"),
        labelled("switch.mower_front_lawn_edge_cut", "on", "Mower Front lawn Edge cut"),
        labelled("select.mower_back_yard_speed", "Fast", "Mower Back yard Speed")
            .with_attribute(attr::OPTIONS, speeds),
        labelled("select.mower_back_yard_pattern", "User defined", "Mower Back yard Pattern")
            .with_attribute(attr::OPTIONS, vec!["Change pattern", "User defined"]),
        labelled("number.mower_back_yard_width", "20", "Mower Back yard Width")
            .with_attribute(attr::MIN, 10)
            .with_attribute(attr::MAX, 40)
            .with_attribute(attr::UNIT, "cm"),
        labelled("sensor.mower_back_yard_area", "120", "Mower Back yard Area")
            .with_attribute(attr::UNIT, "m²"),
        labelled("switch.mower_rain_delay", "on", "Mower Rain delay"),
        labelled("sensor.mower_battery", "87", "Mower Battery").with_attribute(attr::UNIT, "%"),
    ]
    .into_iter()
    .collect();

    snapshot.insert(zone_list_entity(&["Front lawn", "Back yard", "Global"]));
    snapshot
}
