//! Configuration editor panel state

use sunseeker_zone_card_core::services::{CardEditor, EditorField};
use sunseeker_zone_card_core::types::{domain, domain_of, CardConfig, Snapshot};

/// Fields in display order
pub const FIELDS: [EditorField; 5] = [
    EditorField::Entity,
    EditorField::Header,
    EditorField::SwitchEntity,
    EditorField::SwitchName,
    EditorField::CollapsedCard,
];

/// Editor panel
#[derive(Debug, Clone)]
pub struct EditorState {
    pub editor: CardEditor,
    /// Focused field
    pub field: EditorField,
    /// Text cursor in the header field, in characters
    pub header_cursor: usize,
    /// Switch name as typed
    pub switch_name: String,
}

impl EditorState {
    pub fn new(config: CardConfig) -> Self {
        let switch_name = config.switch_name.clone().unwrap_or_default();
        let editor = CardEditor::new(config);
        Self {
            header_cursor: editor.header_input().chars().count(),
            editor,
            field: EditorField::Entity,
            switch_name,
        }
    }

    pub fn focus_next(&mut self) {
        self.field = FIELDS[(field_index(self.field) + 1) % FIELDS.len()];
    }

    pub fn focus_previous(&mut self) {
        self.field = FIELDS[(field_index(self.field) + FIELDS.len() - 1) % FIELDS.len()];
    }

    /// Whether the focused field takes typed text
    pub fn is_text_field(&self) -> bool {
        matches!(self.field, EditorField::Header | EditorField::SwitchName)
    }
}

/// Position of a field in the display order
pub fn field_index(field: EditorField) -> usize {
    FIELDS.iter().position(|f| *f == field).unwrap_or(0)
}

/// Display label of a field
pub fn field_label(field: EditorField) -> &'static str {
    match field {
        EditorField::Entity => "Zone entity",
        EditorField::Header => "Header",
        EditorField::SwitchEntity => "Switch entity",
        EditorField::SwitchName => "Switch name",
        EditorField::CollapsedCard => "Start collapsed",
    }
}

/// Switch entities offered for the companion toggle, as `(entity_id, label)`
pub fn switch_candidates(snapshot: &Snapshot) -> Vec<(String, String)> {
    snapshot
        .iter()
        .filter(|entity| domain_of(&entity.entity_id) == domain::SWITCH)
        .map(|entity| (entity.entity_id.clone(), entity.label().to_string()))
        .collect()
}

/// Next item of `items` after `current`, wrapping; `None` entries included
pub fn cycle<'a>(
    items: &'a [Option<&'a str>],
    current: Option<&str>,
    forward: bool,
) -> Option<&'a str> {
    if items.is_empty() {
        return None;
    }
    let len = items.len();
    let next = match items.iter().position(|item| *item == current) {
        Some(position) if forward => (position + 1) % len,
        Some(position) => (position + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    items[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_wraps_around() {
        let mut state = EditorState::new(CardConfig::new("select.zone"));
        state.focus_previous();
        assert_eq!(state.field, EditorField::CollapsedCard);
        state.focus_next();
        state.focus_next();
        assert_eq!(state.field, EditorField::Header);
        assert!(state.is_text_field());
    }

    #[test]
    fn header_cursor_starts_at_end() {
        let mut config = CardConfig::new("select.zone");
        config.header = "Rasen Übersicht".to_string();
        assert_eq!(EditorState::new(config).header_cursor, 15);
    }

    #[test]
    fn cycle_wraps_and_includes_none() {
        let items = [None, Some("switch.a"), Some("switch.b")];
        assert_eq!(cycle(&items, None, true), Some("switch.a"));
        assert_eq!(cycle(&items, Some("switch.b"), true), None);
        assert_eq!(cycle(&items, None, false), Some("switch.b"));
        assert_eq!(cycle(&items, Some("switch.gone"), true), None);
        assert_eq!(cycle(&[], None, true), None);
    }
}
