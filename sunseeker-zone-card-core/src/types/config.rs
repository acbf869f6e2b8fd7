//! Card configuration record

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};
use crate::types::Snapshot;

/// Card type tag written into every emitted configuration
pub const CARD_TYPE: &str = "custom:sunseeker-zone-card";

/// Header used when none is configured
pub const DEFAULT_HEADER: &str = "Zones";

fn default_card_type() -> String {
    CARD_TYPE.to_string()
}

fn default_header() -> String {
    DEFAULT_HEADER.to_string()
}

/// Card configuration
///
/// Persisted by the host and replaced wholesale whenever it is edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CardConfig {
    /// Card type tag.
    #[serde(rename = "type", default = "default_card_type")]
    #[schemars(description = "Card type, always custom:sunseeker-zone-card")]
    pub card_type: String,

    /// Zone-list entity whose options are the zone names.
    #[schemars(description = "Select entity listing the mowing zones")]
    pub entity: String,

    /// Card header text.
    #[serde(default = "default_header")]
    #[schemars(description = "Header text shown above the zones (default: Zones)")]
    pub header: String,

    /// Optional companion switch shown above the zones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Optional switch entity shown above the zones")]
    pub switch_entity: Option<String>,

    /// Display name override for the companion switch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Display name for the switch entity")]
    pub switch_name: Option<String>,

    /// Whether the card body starts collapsed.
    #[serde(rename = "collapsedCard", default)]
    #[schemars(description = "Start with the card body collapsed (default: false)")]
    pub collapsed_card: bool,

    /// Allow picking another zone-list entity on the card itself.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    #[schemars(description = "Show a zone-list entity picker on the card (default: false)")]
    pub editable: bool,
}

impl CardConfig {
    /// Configuration for a zone-list entity with every other field defaulted
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            card_type: default_card_type(),
            entity: entity.into(),
            header: default_header(),
            switch_entity: None,
            switch_name: None,
            collapsed_card: false,
            editable: false,
        }
    }

    /// Reject configurations the card cannot render
    pub fn validate(&self) -> CardResult<()> {
        if self.entity.trim().is_empty() {
            return Err(CardError::InvalidConfig("entity is required".to_string()));
        }
        if matches!(&self.switch_entity, Some(id) if id.trim().is_empty()) {
            let reason = "switch_entity must not be empty when set".to_string();
            return Err(CardError::InvalidConfig(reason));
        }
        Ok(())
    }

    /// Header text, falling back to the default when blank
    pub fn header_text(&self) -> &str {
        if self.header.trim().is_empty() {
            DEFAULT_HEADER
        } else {
            &self.header
        }
    }

    /// Check that the referenced entities exist in a snapshot
    ///
    /// Advisory only: the card still renders (empty) when this fails.
    pub fn check_entities(&self, snapshot: &Snapshot) -> CardResult<()> {
        let referenced =
            std::iter::once(self.entity.as_str()).chain(self.switch_entity.as_deref());
        for entity_id in referenced {
            if snapshot.get(entity_id).is_none() {
                return Err(CardError::EntityNotFound(entity_id.to_string()));
            }
        }
        Ok(())
    }
}

/// Declarative schema of the card configuration
pub fn card_config_schema() -> schemars::Schema {
    schemars::schema_for!(CardConfig)
}
