//! Card controller
//!
//! Owns the configuration, the card state record and the last rendered view,
//! and runs one reconcile cycle per upstream update or user action.

use std::sync::Arc;

use super::card_state::CardState;
use super::edit_session::{dispatch_value, ChangeOutcome, ValueChange};
use super::value_presenter::kind_of;
use super::view_reconciler::{rebuild, reconcile, ReconcileAction, RenderInput};
use crate::error::CardResult;
use crate::i18n::Language;
use crate::traits::CommandDispatcher;
use crate::types::{
    domain, domain_of, CardConfig, CardView, EntityKind, HostState, StagedValue,
};

/// Mowing-zone card
pub struct ZoneCard {
    config: Option<CardConfig>,
    state: CardState,
    host: HostState,
    view: Option<CardView>,
    dispatcher: Arc<dyn CommandDispatcher>,
}

impl ZoneCard {
    /// Create an unconfigured card
    #[must_use]
    pub fn new(dispatcher: Arc<dyn CommandDispatcher>) -> Self {
        Self {
            config: None,
            state: CardState::default(),
            host: HostState::default(),
            view: None,
            dispatcher,
        }
    }

    /// Replace the configuration
    ///
    /// Invalid records are rejected and the previous configuration stays in
    /// effect. Collapse state of known zones and any open edit survive; the
    /// `collapsed_card` flag only applies on the first configuration or when
    /// it changes. A picked zone-list entity is dropped when the configured
    /// one changes or picking is switched off.
    pub fn set_config(&mut self, config: CardConfig) -> CardResult<()> {
        if let Err(e) = config.validate() {
            log::warn!("Rejected card configuration: {e}");
            return Err(e);
        }

        let previous = self.config.as_ref();
        if previous.is_none_or(|old| old.collapsed_card != config.collapsed_card) {
            self.state.card_collapsed = config.collapsed_card;
        }
        if !config.editable || previous.is_some_and(|old| old.entity != config.entity) {
            self.state.zone_entity = None;
        }
        self.config = Some(config);
        self.refresh_zones();
        self.rebuild_view();
        Ok(())
    }

    pub fn config(&self) -> Option<&CardConfig> {
        self.config.as_ref()
    }

    /// Push a new host state
    ///
    /// Returns the reconcile decision, or `None` while unconfigured.
    pub fn update(&mut self, host: HostState) -> Option<ReconcileAction> {
        self.host = host;
        self.config.as_ref()?;

        self.refresh_zones();
        let action = self.reconcile_view();
        log::debug!(
            "Host update reconciled with {action:?} ({} zones)",
            self.state.zones.len()
        );
        Some(action)
    }

    /// Last rendered view
    pub fn view(&self) -> Option<&CardView> {
        self.view.as_ref()
    }

    /// Zones derived from the latest snapshot
    pub fn zones(&self) -> &[String] {
        &self.state.zones
    }

    pub fn host_state(&self) -> &HostState {
        &self.host
    }

    /// Active language, from the host's language code
    pub fn language(&self) -> Language {
        Language::from_host(self.host.language.as_deref())
    }

    pub fn is_zone_collapsed(&self, zone: &str) -> bool {
        self.state.collapse.is_collapsed(zone)
    }

    /// Zone-list entity in effect, picked or configured
    pub fn zone_entity(&self) -> Option<&str> {
        let config = self.config.as_ref()?;
        Some(self.state.zone_list_entity(&config.entity))
    }

    /// Whether the zone-list entity may be picked on the card
    pub fn can_pick_zone_entity(&self) -> bool {
        self.config.as_ref().is_some_and(|config| config.editable)
    }

    /// Switch to another zone-list entity for this card only
    ///
    /// Allowed when the configuration is `editable` and the entity is a
    /// `select`. The configuration itself is left untouched. Returns whether
    /// the switch happened.
    pub fn pick_zone_entity(&mut self, entity_id: &str) -> bool {
        if !self.can_pick_zone_entity() || domain_of(entity_id) != domain::SELECT {
            log::debug!("Ignoring zone entity pick {entity_id}");
            return false;
        }

        log::info!("Zone entity switched to {entity_id}");
        self.state.zone_entity = Some(entity_id.to_string());
        self.refresh_zones();
        self.rebuild_view();
        true
    }

    /// Flip a zone's collapse state
    ///
    /// Zones missing from the current set are left alone and `false` is
    /// returned.
    pub fn toggle_zone(&mut self, zone: &str) -> bool {
        let Some(name) = self.state.find_zone(zone).map(str::to_string) else {
            log::debug!("Ignoring collapse toggle for unknown zone {zone}");
            return false;
        };

        self.state.collapse.toggle(&name);
        self.rebuild_view();
        true
    }

    /// Flip the whole card body; returns the new collapsed state
    pub fn toggle_card(&mut self) -> bool {
        self.state.card_collapsed = !self.state.card_collapsed;
        self.rebuild_view();
        self.state.card_collapsed
    }

    pub fn is_card_collapsed(&self) -> bool {
        self.state.card_collapsed
    }

    pub fn is_editing(&self) -> bool {
        self.state.session.is_editing()
    }

    pub fn staged_value(&self, entity_id: &str) -> Option<&StagedValue> {
        self.state.session.staged(entity_id)
    }

    pub fn staged_count(&self) -> usize {
        self.state.session.staged_count()
    }

    /// Enter edit mode
    pub fn enter_edit(&mut self) -> bool {
        let entered = self.state.session.enter();
        if entered {
            self.reconcile_view();
        }
        entered
    }

    /// Discard staged values; returns how many were dropped
    pub fn cancel_edit(&mut self) -> usize {
        let discarded = self.state.session.cancel();
        log::debug!("Edit cancelled, {discarded} staged values discarded");
        self.rebuild_view();
        discarded
    }

    /// Dispatch staged values; returns how many commands were sent
    pub fn commit_edit(&mut self) -> usize {
        let sent = self.state.session.commit(self.dispatcher.as_ref());
        log::debug!("Edit committed, {sent} commands dispatched");
        self.rebuild_view();
        sent
    }

    /// Apply a user value change
    ///
    /// Staged while editing, dispatched right away otherwise. Changes that do
    /// not fit the entity (unknown entity, read-only kind, wrong value type,
    /// unlisted option, non-numeric text) are ignored.
    pub fn change_value(&mut self, entity_id: &str, change: ValueChange) -> ChangeOutcome {
        let Some(value) = self.accept_change(entity_id, &change) else {
            log::warn!("Ignoring {change:?} for {entity_id}");
            return ChangeOutcome::Ignored;
        };

        if self.state.session.stage(entity_id, value.clone()) {
            self.reconcile_view();
            return ChangeOutcome::Staged;
        }

        match dispatch_value(self.dispatcher.as_ref(), entity_id, &value) {
            Ok(()) => ChangeOutcome::Dispatched,
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Could not apply value for {entity_id}: {e}");
                } else {
                    log::error!("Could not apply value for {entity_id}: {e}");
                }
                ChangeOutcome::Ignored
            }
        }
    }

    fn accept_change(&self, entity_id: &str, change: &ValueChange) -> Option<StagedValue> {
        let entity = self.host.snapshot.get(entity_id)?;
        let fits = match (kind_of(entity_id), change) {
            (EntityKind::Choice, ValueChange::Option(option)) => entity
                .options()
                .is_none_or(|options| options.iter().any(|known| known == option)),
            (EntityKind::Number, ValueChange::Number(_))
            | (EntityKind::Toggle, ValueChange::Switch(_)) => true,
            _ => false,
        };
        if fits {
            change.to_staged()
        } else {
            None
        }
    }

    fn refresh_zones(&mut self) {
        let Some(config) = &self.config else {
            return;
        };
        let state = std::mem::take(&mut self.state);
        let zone_list_entity = state.zone_list_entity(&config.entity).to_string();
        self.state = state.with_zones_from(&self.host.snapshot, &zone_list_entity);
    }

    fn reconcile_view(&mut self) -> ReconcileAction {
        let Some(config) = &self.config else {
            return ReconcileAction::Rebuild;
        };
        let input = RenderInput {
            snapshot: &self.host.snapshot,
            config,
            language: Language::from_host(self.host.language.as_deref()),
            state: &self.state,
        };
        let (view, action) = reconcile(self.view.take(), &input);
        self.view = Some(view);
        action
    }

    fn rebuild_view(&mut self) {
        let Some(config) = &self.config else {
            return;
        };
        let input = RenderInput {
            snapshot: &self.host.snapshot,
            config,
            language: Language::from_host(self.host.language.as_deref()),
            state: &self.state,
        };
        self.view = Some(rebuild(&input));
    }
}
