//! View reconciler
//!
//! On each upstream update the card either rebuilds its view tree or patches the
//! values of the existing controls. The choice depends only on the previous
//! zone count, the new zone count and whether an edit session is open.

use super::card_state::CardState;
use super::entity_matcher::{label_after_zone, match_entities};
use super::value_presenter::present;
use crate::i18n::Language;
use crate::types::{CardConfig, CardView, EntityRow, Snapshot, SwitchView, ZoneView};

/// What to do with the rendered view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileAction {
    /// Build a new tree
    Rebuild,
    /// Update control values in place, keep structure
    Patch,
}

/// Decide between rebuild and patch
///
/// * no previous render -> rebuild
/// * editing -> patch, so staged edits and focus survive
/// * zone count changed -> rebuild
/// * otherwise -> patch
pub fn decide(
    previous_zone_count: Option<usize>,
    zone_count: usize,
    editing: bool,
) -> ReconcileAction {
    match previous_zone_count {
        None => ReconcileAction::Rebuild,
        Some(_) if editing => ReconcileAction::Patch,
        Some(previous) if previous == zone_count => ReconcileAction::Patch,
        Some(_) => ReconcileAction::Rebuild,
    }
}

/// Inputs of one render
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub snapshot: &'a Snapshot,
    pub config: &'a CardConfig,
    pub language: Language,
    pub state: &'a CardState,
}

/// Build the whole view tree
pub fn rebuild(input: &RenderInput<'_>) -> CardView {
    let zone_list_entity = input.state.zone_list_entity(&input.config.entity);
    let zones = input
        .state
        .zones
        .iter()
        .map(|zone| ZoneView {
            name: zone.clone(),
            collapsed: input.state.collapse.is_collapsed(zone),
            rows: match_entities(input.snapshot, zone, zone_list_entity)
                .into_iter()
                .map(|entity| {
                    let staged = input.state.session.staged(&entity.entity_id);
                    EntityRow {
                        entity_id: entity.entity_id.clone(),
                        label: label_after_zone(entity.label(), zone),
                        control: present(entity, input.language, staged),
                        staged: staged.is_some(),
                    }
                })
                .collect(),
        })
        .collect();

    CardView {
        header: input.config.header_text().to_string(),
        collapsed: input.state.card_collapsed,
        editing: input.state.session.is_editing(),
        buttons: input.language.button_labels(),
        switch: switch_view(input),
        zones,
    }
}

/// Refresh control values from the snapshot without touching structure
///
/// Rows whose entity left the snapshot keep their last value.
pub fn patch(view: &mut CardView, input: &RenderInput<'_>) {
    for row in view.zones.iter_mut().flat_map(|zone| zone.rows.iter_mut()) {
        if let Some(entity) = input.snapshot.get(&row.entity_id) {
            let staged = input.state.session.staged(&row.entity_id);
            row.control = present(entity, input.language, staged);
            row.staged = staged.is_some();
        }
    }

    if let (Some(current), Some(fresh)) = (view.switch.as_mut(), switch_view(input)) {
        if current.entity_id == fresh.entity_id {
            *current = fresh;
        }
    }

    view.editing = input.state.session.is_editing();
    view.buttons = input.language.button_labels();
}

/// Apply the reconcile decision to the previous view
pub fn reconcile(
    previous: Option<CardView>,
    input: &RenderInput<'_>,
) -> (CardView, ReconcileAction) {
    let action = decide(
        previous.as_ref().map(|view| view.zones.len()),
        input.state.zones.len(),
        input.state.session.is_editing(),
    );

    match (action, previous) {
        (ReconcileAction::Patch, Some(mut view)) => {
            patch(&mut view, input);
            (view, action)
        }
        _ => (rebuild(input), ReconcileAction::Rebuild),
    }
}

fn switch_view(input: &RenderInput<'_>) -> Option<SwitchView> {
    let entity_id = input.config.switch_entity.as_deref()?;
    let entity = input.snapshot.get(entity_id)?;
    let staged = input.state.session.staged(entity_id);

    Some(SwitchView {
        entity_id: entity_id.to_string(),
        label: input
            .config
            .switch_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| entity.label())
            .to_string(),
        on: staged.map_or_else(|| entity.is_on(), |value| value.as_state() == "on"),
        staged: staged.is_some(),
    })
}
