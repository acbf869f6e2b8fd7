//! Card cursor
//!
//! The cursor remembers which item it is on, not just where. After a rebuild
//! it finds the same item again, or the nearest position if it is gone.

use sunseeker_zone_card_core::types::CardView;

/// A focusable item in the card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorTarget {
    /// Companion switch row
    Switch(String),
    /// Zone header
    Zone(String),
    /// Entity row inside an expanded zone
    Row { zone: String, entity_id: String },
}

impl CursorTarget {
    pub fn entity_id(&self) -> Option<&str> {
        match self {
            Self::Switch(entity_id) | Self::Row { entity_id, .. } => Some(entity_id),
            Self::Zone(_) => None,
        }
    }
}

/// Focusable items in display order
pub fn focus_targets(view: &CardView) -> Vec<CursorTarget> {
    if view.collapsed {
        return Vec::new();
    }

    let mut targets: Vec<CursorTarget> = view
        .switch
        .iter()
        .map(|switch| CursorTarget::Switch(switch.entity_id.clone()))
        .collect();

    for zone in &view.zones {
        targets.push(CursorTarget::Zone(zone.name.clone()));
        if !zone.collapsed {
            targets.extend(zone.rows.iter().map(|row| CursorTarget::Row {
                zone: zone.name.clone(),
                entity_id: row.entity_id.clone(),
            }));
        }
    }
    targets
}

/// Cursor keyed by item identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardCursor {
    index: usize,
    target: Option<CursorTarget>,
}

impl CardCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&CursorTarget> {
        self.target.as_ref()
    }

    pub fn is_on(&self, target: &CursorTarget) -> bool {
        self.target.as_ref() == Some(target)
    }

    /// Re-target after the item list changed
    pub fn sync(&mut self, targets: &[CursorTarget]) {
        if let Some(position) = self
            .target
            .as_ref()
            .and_then(|target| targets.iter().position(|t| t == target))
        {
            self.index = position;
            return;
        }

        self.index = self.index.min(targets.len().saturating_sub(1));
        self.target = targets.get(self.index).cloned();
    }

    pub fn select_next(&mut self, targets: &[CursorTarget]) {
        self.sync(targets);
        if self.index + 1 < targets.len() {
            self.select(targets, self.index + 1);
        }
    }

    pub fn select_previous(&mut self, targets: &[CursorTarget]) {
        self.sync(targets);
        if self.index > 0 {
            self.select(targets, self.index - 1);
        }
    }

    fn select(&mut self, targets: &[CursorTarget], index: usize) {
        self.index = index;
        self.target = targets.get(index).cloned();
    }
}
