//! Edit session
//!
//! While editing, value changes are buffered per entity and sent as one batch on
//! commit. Outside edit mode every change is applied immediately.

use std::collections::BTreeMap;

use crate::error::CardResult;
use crate::traits::CommandDispatcher;
use crate::types::{ServiceCall, StagedValue};

/// Edit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
}

/// A raw value change from the user
#[derive(Debug, Clone, PartialEq)]
pub enum ValueChange {
    /// Choice option picked
    Option(String),
    /// Text typed into a number field
    Number(String),
    /// Toggle flipped
    Switch(bool),
}

impl ValueChange {
    /// Value to stage or apply; `None` for non-numeric number input
    pub fn to_staged(&self) -> Option<StagedValue> {
        match self {
            Self::Option(option) => Some(StagedValue::Text(option.clone())),
            Self::Number(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(StagedValue::Number),
            Self::Switch(on) => Some(StagedValue::Text(if *on { "on" } else { "off" }.to_string())),
        }
    }
}

/// Result of a value change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// Buffered in the edit session
    Staged,
    /// Sent to the platform right away
    Dispatched,
    /// Rejected, previous value kept
    Ignored,
}

/// Dispatch a single value with the per-domain command mapping
pub fn dispatch_value(
    dispatcher: &dyn CommandDispatcher,
    entity_id: &str,
    value: &StagedValue,
) -> CardResult<()> {
    let call = ServiceCall::for_value(entity_id, value)?;
    log::debug!("Dispatching {}.{} for {entity_id}", call.domain, call.service);
    dispatcher.dispatch(&call);
    Ok(())
}

/// Staged edits keyed by entity id
///
/// The buffer is non-empty only while editing; cancel and commit clear it in
/// one step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditSession {
    mode: EditMode,
    staged: BTreeMap<String, StagedValue>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    /// Enter edit mode; already editing keeps the current buffer
    pub fn enter(&mut self) -> bool {
        if self.is_editing() {
            return false;
        }
        self.mode = EditMode::Editing;
        true
    }

    /// Stage a value, replacing any earlier one for the same entity
    ///
    /// Returns `false` (and stages nothing) outside edit mode.
    pub fn stage(&mut self, entity_id: &str, value: StagedValue) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.staged.insert(entity_id.to_string(), value);
        true
    }

    /// Staged value for an entity; `None` means "use the live state"
    pub fn staged(&self, entity_id: &str) -> Option<&StagedValue> {
        self.staged.get(entity_id)
    }

    pub fn staged_count(&self) -> usize {
        self.staged.len()
    }

    /// Drop every staged value and return to viewing
    pub fn cancel(&mut self) -> usize {
        let discarded = self.staged.len();
        self.staged.clear();
        self.mode = EditMode::Viewing;
        discarded
    }

    /// Send one command per staged entry, then clear and return to viewing
    ///
    /// Dispatch is fire-and-forget; entries that cannot be mapped are logged and
    /// dropped. Returns the number of commands sent.
    pub fn commit(&mut self, dispatcher: &dyn CommandDispatcher) -> usize {
        let staged = std::mem::take(&mut self.staged);
        self.mode = EditMode::Viewing;

        let mut sent = 0;
        for (entity_id, value) in &staged {
            match dispatch_value(dispatcher, entity_id, value) {
                Ok(()) => sent += 1,
                Err(e) => log::warn!("Skipping staged value for {entity_id}: {e}"),
            }
        }
        sent
    }
}
