//! Sunseeker Zone Card TUI
//!
//! Drives the mowing-zone card from a terminal, with a local JSON snapshot
//! standing in for the home-automation host.
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: input messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: host and storage stand-ins (`backend/`)
//!
//! ## Environment
//!
//! - `ZONE_CARD_STATES`: entity snapshot file
//! - `ZONE_CARD_CONFIG`: card configuration file
//! - `ZONE_CARD_LANGUAGE`: host language code (`de`, `fr-CA`, ...)
//! - `ZONE_CARD_THEME`: `light` or `dark`
//! - `ZONE_CARD_LOG`: log filter directives

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use anyhow::Result;

use backend::{JsonFileConfigStore, LocalHost, Settings, LOG_VAR};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    let settings = Settings::from_env();

    // 1. Logging goes to a file; the terminal belongs to the UI
    let _log_guard = init_logging(&settings.log_dir, LOG_VAR)?;
    tracing::info!("Starting zone card with {settings:?}");
    view::theme::set_light_theme(settings.light_theme);

    // 2. Host stand-in and configuration storage
    let host = Arc::new(LocalHost::open(&settings.states_path, settings.language.clone())?);
    let store = Arc::new(JsonFileConfigStore::new(&settings.config_path));
    tracing::info!("Card configuration at {}", store.path().display());
    let mut app = model::App::new(host, store);

    // 3. Main loop; the terminal is restored whatever the outcome
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!("Zone card stopped: {e:#}");
    }
    result
}
