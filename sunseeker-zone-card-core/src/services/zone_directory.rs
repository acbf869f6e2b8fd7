//! Zone directory
//!
//! Zone names come from the `options` attribute of one designated zone-list
//! entity. Collapse state is remembered per zone name for the card's lifetime.

use std::collections::BTreeMap;

use crate::types::Snapshot;

/// Zone name that is never rendered as a zone
pub const RESERVED_ZONE: &str = "global";

/// Whether a zone name is the reserved non-zone (case-insensitive)
pub fn is_reserved_zone(name: &str) -> bool {
    name.to_lowercase() == RESERVED_ZONE
}

/// Zones in their reported order, without the reserved `global` entry
///
/// A missing zone-list entity or a missing `options` attribute yields no zones.
pub fn derive_zones(snapshot: &Snapshot, zone_list_entity_id: &str) -> Vec<String> {
    let Some(entity) = snapshot.get(zone_list_entity_id) else {
        log::debug!("Zone-list entity {zone_list_entity_id} not in snapshot");
        return Vec::new();
    };
    let Some(options) = entity.options() else {
        log::debug!("Zone-list entity {zone_list_entity_id} has no options");
        return Vec::new();
    };

    options
        .into_iter()
        .filter(|zone| !is_reserved_zone(zone))
        .collect()
}

/// Per-zone collapse state, keyed by zone name
///
/// Entries for zones that disappear are kept so a returning zone gets its
/// previous state back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseMap {
    collapsed: BTreeMap<String, bool>,
}

impl CollapseMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record zones; names seen for the first time start collapsed
    pub fn observe<S: AsRef<str>>(&mut self, zones: &[S]) {
        for zone in zones {
            self.collapsed
                .entry(zone.as_ref().to_string())
                .or_insert(true);
        }
    }

    /// Collapse state of a zone, collapsed when never seen
    pub fn is_collapsed(&self, zone: &str) -> bool {
        self.collapsed.get(zone).copied().unwrap_or(true)
    }

    /// Flip a known zone, returning its new state
    pub fn toggle(&mut self, zone: &str) -> Option<bool> {
        let collapsed = self.collapsed.get_mut(zone)?;
        *collapsed = !*collapsed;
        Some(*collapsed)
    }

    pub fn len(&self) -> usize {
        self.collapsed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collapsed.is_empty()
    }
}
