//! Application state

use std::sync::Arc;

use sunseeker_zone_card_core::types::{CardConfig, CardView};
use sunseeker_zone_card_core::{ConfigStore, StateProvider, ZoneCard};

use super::cursor::{focus_targets, CardCursor, CursorTarget};
use super::editor::EditorState;
use crate::backend::LocalHost;

/// Number being typed into a number row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberInput {
    pub entity_id: String,
    pub text: String,
}

/// Application state
pub struct App {
    /// Whether the main loop should stop
    pub should_quit: bool,

    /// The card being driven
    pub card: ZoneCard,

    /// Host platform stand-in
    pub host: Arc<LocalHost>,

    /// Where configuration changes are written
    pub config_store: Arc<dyn ConfigStore>,

    /// Host generation last pushed to the card
    pub seen_generation: u64,

    /// Card cursor
    pub cursor: CardCursor,

    /// Number input in progress
    pub number_input: Option<NumberInput>,

    /// Configuration editor, when open
    pub editor: Option<EditorState>,

    /// Status bar message
    pub status_message: Option<String>,
}

impl App {
    /// Create the app and load the stored configuration
    ///
    /// Without a usable configuration the editor opens right away.
    pub fn new(host: Arc<LocalHost>, config_store: Arc<dyn ConfigStore>) -> Self {
        let mut card = ZoneCard::new(host.clone());
        card.update(host.host_state());

        let mut app = Self {
            should_quit: false,
            card,
            seen_generation: host.generation(),
            host,
            config_store,
            cursor: CardCursor::new(),
            number_input: None,
            editor: None,
            status_message: None,
        };

        match app.config_store.load() {
            Ok(Some(config)) => {
                if let Err(e) = app.card.set_config(config.clone()) {
                    app.set_status(e.to_string());
                    app.open_editor(config);
                }
            }
            Ok(None) => {
                app.set_status("No configuration yet, pick a zone entity");
                app.open_editor(CardConfig::new(""));
            }
            Err(e) => {
                tracing::error!("Failed to load card configuration: {e}");
                app.set_status(e.to_string());
                app.open_editor(CardConfig::new(""));
            }
        }

        app.sync_cursor();
        app
    }

    /// Push a newer host snapshot to the card, if there is one
    pub fn sync_host(&mut self) -> bool {
        let generation = self.host.generation();
        if generation == self.seen_generation {
            return false;
        }

        self.seen_generation = generation;
        if let Some(action) = self.card.update(self.host.host_state()) {
            tracing::debug!("Host generation {generation} applied with {action:?}");
        }
        self.sync_cursor();
        true
    }

    pub fn view(&self) -> Option<&CardView> {
        self.card.view()
    }

    /// Focusable items of the current view
    pub fn targets(&self) -> Vec<CursorTarget> {
        self.card.view().map(focus_targets).unwrap_or_default()
    }

    /// Re-target the cursor after the view changed
    pub fn sync_cursor(&mut self) {
        let targets = self.targets();
        self.cursor.sync(&targets);

        let on_input_row = match (&self.number_input, self.cursor.current()) {
            (Some(input), Some(target)) => target.entity_id() == Some(input.entity_id.as_str()),
            _ => false,
        };
        if !on_input_row {
            self.number_input = None;
        }
    }

    pub fn open_editor(&mut self, config: CardConfig) {
        self.number_input = None;
        self.editor = Some(EditorState::new(config));
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
