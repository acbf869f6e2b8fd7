//! Rendered card tree
//!
//! A projection of card state plus the latest snapshot. Front ends draw it; the
//! reconciler either rebuilds it or patches the values of its controls in place.

use serde::Serialize;

/// Presentation kind, chosen by entity domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityKind {
    /// `select` - enumerated choice
    Choice,
    /// `number` - bounded number
    Number,
    /// `switch` - on/off toggle
    Toggle,
    /// anything else - read-only text
    Readout,
}

impl EntityKind {
    pub fn is_editable(self) -> bool {
        !matches!(self, Self::Readout)
    }
}

/// One option of a choice control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    /// Canonical option sent back to the host
    pub value: String,
    /// Translated display text
    pub label: String,
}

/// Display and edit representation of an entity value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Control {
    Choice {
        options: Vec<ChoiceOption>,
        selected: String,
    },
    Number {
        value: String,
        min: f64,
        max: f64,
        step: f64,
        unit: Option<String>,
    },
    Toggle {
        on: bool,
    },
    Readout {
        text: String,
    },
}

impl Control {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Choice { .. } => EntityKind::Choice,
            Self::Number { .. } => EntityKind::Number,
            Self::Toggle { .. } => EntityKind::Toggle,
            Self::Readout { .. } => EntityKind::Readout,
        }
    }

    /// Short text of the current value, used by plain renderers
    pub fn display_value(&self) -> String {
        match self {
            Self::Choice { options, selected } => options
                .iter()
                .find(|option| &option.value == selected)
                .map_or_else(|| selected.clone(), |option| option.label.clone()),
            Self::Number { value, unit, .. } => match unit {
                Some(unit) => format!("{value} {unit}"),
                None => value.clone(),
            },
            Self::Toggle { on } => if *on { "on" } else { "off" }.to_string(),
            Self::Readout { text } => text.clone(),
        }
    }
}

/// A value-bearing row inside a zone
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityRow {
    pub entity_id: String,
    /// Label text after the zone name
    pub label: String,
    pub control: Control,
    /// Value comes from the edit buffer, not the live state
    pub staged: bool,
}

/// One zone block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneView {
    pub name: String,
    pub collapsed: bool,
    /// Empty rows render the "no matching entities" placeholder
    pub rows: Vec<EntityRow>,
}

/// Companion switch row above the zones
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwitchView {
    pub entity_id: String,
    pub label: String,
    pub on: bool,
    pub staged: bool,
}

/// Button captions in the active language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonLabels {
    pub edit: String,
    pub submit: String,
    pub cancel: String,
}

/// Whole card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub header: String,
    pub collapsed: bool,
    pub editing: bool,
    pub buttons: ButtonLabels,
    pub switch: Option<SwitchView>,
    pub zones: Vec<ZoneView>,
}

impl CardView {
    pub fn zone(&self, name: &str) -> Option<&ZoneView> {
        self.zones.iter().find(|zone| zone.name == name)
    }

    /// Every row across all zones
    pub fn rows(&self) -> impl Iterator<Item = &EntityRow> {
        self.zones.iter().flat_map(|zone| zone.rows.iter())
    }

    pub fn row(&self, entity_id: &str) -> Option<&EntityRow> {
        self.rows().find(|row| row.entity_id == entity_id)
    }
}
