//! Card state record
//!
//! Everything the card remembers between renders. Render and update functions
//! take it explicitly; the rendered view is a projection of it plus the latest
//! snapshot.

use super::edit_session::EditSession;
use super::zone_directory::{derive_zones, CollapseMap};
use crate::types::Snapshot;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardState {
    /// Per-zone collapse state
    pub collapse: CollapseMap,
    /// Whole card body collapsed
    pub card_collapsed: bool,
    /// Staged edits
    pub session: EditSession,
    /// Zones derived from the latest snapshot
    pub zones: Vec<String>,
    /// Zone-list entity picked on the card, shadowing the configured one
    pub zone_entity: Option<String>,
}

impl CardState {
    pub fn new(card_collapsed: bool) -> Self {
        Self {
            card_collapsed,
            ..Self::default()
        }
    }

    /// Re-derive zones from a snapshot and register new names as collapsed
    #[must_use]
    pub fn with_zones_from(mut self, snapshot: &Snapshot, zone_list_entity_id: &str) -> Self {
        self.zones = derive_zones(snapshot, zone_list_entity_id);
        self.collapse.observe(self.zones.as_slice());
        self
    }

    /// Zone-list entity in effect
    pub fn zone_list_entity<'a>(&'a self, configured: &'a str) -> &'a str {
        self.zone_entity.as_deref().unwrap_or(configured)
    }

    /// Current zone with this name, compared case-insensitively
    pub fn find_zone(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.zones
            .iter()
            .find(|zone| zone.to_lowercase() == name)
            .map(String::as_str)
    }
}
