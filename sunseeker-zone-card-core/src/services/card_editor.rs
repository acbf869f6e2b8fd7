//! Configuration editor
//!
//! Backs the editor surface: every field change produces the complete
//! replacement configuration, never a diff.

use crate::types::{domain, domain_of, CardConfig, Snapshot, DEFAULT_HEADER};

/// Preview text when no zone-list entity is chosen
pub const NONE_SELECTED: &str = "None selected";

/// Editor input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Entity,
    Header,
    SwitchEntity,
    SwitchName,
    CollapsedCard,
}

/// Focus and cursor to restore once the editor surface is redrawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRestore {
    pub field: EditorField,
    /// Selection as `(start, end)` character offsets
    pub selection: (usize, usize),
}

/// Preview block under the editor fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorPreview {
    pub header: String,
    pub entity: String,
}

/// Working state of the configuration editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEditor {
    config: CardConfig,
    /// Header exactly as typed, may be empty
    header_input: String,
    pending_focus: Option<FocusRestore>,
}

impl CardEditor {
    #[must_use]
    pub fn new(config: CardConfig) -> Self {
        Self {
            header_input: config.header.clone(),
            config,
            pending_focus: None,
        }
    }

    /// Configuration the editor would emit right now
    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Header text as typed
    pub fn header_input(&self) -> &str {
        &self.header_input
    }

    /// Zone-list candidates: every `select` entity as `(entity_id, label)`
    pub fn candidates(snapshot: &Snapshot) -> Vec<(String, String)> {
        snapshot
            .iter()
            .filter(|entity| domain_of(&entity.entity_id) == domain::SELECT)
            .map(|entity| (entity.entity_id.clone(), entity.label().to_string()))
            .collect()
    }

    pub fn select_entity(&mut self, entity_id: &str) -> CardConfig {
        self.config.entity = entity_id.to_string();
        self.emit()
    }

    /// Update the header and schedule the cursor to come back to it
    pub fn set_header(&mut self, text: &str, selection: (usize, usize)) -> CardConfig {
        self.header_input = text.to_string();
        self.pending_focus = Some(FocusRestore {
            field: EditorField::Header,
            selection,
        });
        self.emit()
    }

    /// Set or clear the companion switch; blank clears it
    pub fn set_switch_entity(&mut self, entity_id: Option<&str>) -> CardConfig {
        self.config.switch_entity = non_blank(entity_id);
        self.emit()
    }

    pub fn set_switch_name(&mut self, name: Option<&str>) -> CardConfig {
        self.config.switch_name = non_blank(name);
        self.emit()
    }

    pub fn toggle_collapsed_card(&mut self) -> CardConfig {
        self.config.collapsed_card = !self.config.collapsed_card;
        self.emit()
    }

    /// Deferred focus restore, handed out once
    pub fn take_pending_focus(&mut self) -> Option<FocusRestore> {
        self.pending_focus.take()
    }

    pub fn preview(&self, snapshot: &Snapshot) -> EditorPreview {
        let entity = if self.config.entity.is_empty() {
            NONE_SELECTED.to_string()
        } else {
            snapshot
                .get(&self.config.entity)
                .and_then(|entity| entity.friendly_name())
                .unwrap_or(&self.config.entity)
                .to_string()
        };

        EditorPreview {
            header: self.header_input.clone(),
            entity,
        }
    }

    fn emit(&mut self) -> CardConfig {
        self.config.header = if self.header_input.is_empty() {
            DEFAULT_HEADER.to_string()
        } else {
            self.header_input.clone()
        };
        self.config.clone()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
