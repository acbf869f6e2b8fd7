//! Test helpers

use std::sync::Arc;

use sunseeker_zone_card_core::traits::InMemoryConfigStore;
use sunseeker_zone_card_core::types::{CardConfig, Snapshot};

use crate::backend::LocalHost;
use crate::model::App;

/// Zone-list entity of the demo snapshot
pub const ZONE_LIST: &str = "select.mower_zone";

/// The bundled demo snapshot
pub fn demo_snapshot() -> Snapshot {
    serde_json::from_str(include_str!("../../demos/mower_states.json")).unwrap_or_default()
}

/// App over the demo snapshot with a stored configuration
pub fn demo_app(config: Option<CardConfig>) -> App {
    let host = Arc::new(LocalHost::new(demo_snapshot(), Some("en".to_string())));
    let store = config.map_or_else(InMemoryConfigStore::new, InMemoryConfigStore::with_config);
    let store = Arc::new(store);
    App::new(host, store)
}

/// App configured for the demo zone list
pub fn configured_app() -> App {
    demo_app(Some(CardConfig::new(ZONE_LIST)))
}
