//! Local host
//!
//! Stands in for the home-automation platform: entity states come from a JSON
//! file and dispatched service calls are applied to the in-memory copy.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use anyhow::{Context, Result};
use sunseeker_zone_card_core::types::{
    format_number, HostState, ServiceCall, ServicePayload, Snapshot,
};
use sunseeker_zone_card_core::{CommandDispatcher, StateProvider};

/// Host backed by a snapshot file
pub struct LocalHost {
    path: Option<PathBuf>,
    language: Option<String>,
    snapshot: RwLock<Snapshot>,
    generation: AtomicU64,
}

impl LocalHost {
    /// Host with a fixed snapshot and no backing file
    pub fn new(snapshot: Snapshot, language: Option<String>) -> Self {
        Self {
            path: None,
            language,
            snapshot: RwLock::new(snapshot),
            generation: AtomicU64::new(1),
        }
    }

    /// Host reading entity states from `path`
    ///
    /// A missing file starts the host with an empty snapshot.
    pub fn open(path: &Path, language: Option<String>) -> Result<Self> {
        let snapshot = read_snapshot(path)?;
        tracing::info!("Loaded {} entities from {}", snapshot.len(), path.display());

        Ok(Self {
            path: Some(path.to_path_buf()),
            ..Self::new(snapshot, language)
        })
    }

    /// Re-read the snapshot file and push it as a new generation
    pub fn reload(&self) -> Result<usize> {
        let Some(path) = &self.path else {
            return Ok(self.read_guard().len());
        };

        let snapshot = read_snapshot(path)?;
        let count = snapshot.len();
        *self.write_guard() = snapshot;
        self.generation.fetch_add(1, Ordering::SeqCst);
        tracing::info!("Reloaded {count} entities from {}", path.display());
        Ok(count)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn apply(&self, call: &ServiceCall) -> bool {
        let mut snapshot = self.write_guard();
        let Some(entity) = snapshot.get_mut(&call.entity_id) else {
            tracing::warn!("Service call for unknown entity {}", call.entity_id);
            return false;
        };

        let state = match (call.service.as_str(), &call.payload) {
            ("select_option", ServicePayload::Option(option)) => option.clone(),
            ("set_value", ServicePayload::Value(value)) => format_number(*value),
            ("turn_on", _) => "on".to_string(),
            ("turn_off", _) => "off".to_string(),
            (service, _) => {
                tracing::warn!("Unsupported service {}.{service}", call.domain);
                return false;
            }
        };

        tracing::info!(
            "{}.{} {} -> {state}",
            call.domain,
            call.service,
            call.entity_id
        );
        entity.state = state;
        true
    }

    fn read_guard(&self) -> std::sync::RwLockReadGuard<'_, Snapshot> {
        self.snapshot
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_guard(&self) -> std::sync::RwLockWriteGuard<'_, Snapshot> {
        self.snapshot
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl StateProvider for LocalHost {
    fn host_state(&self) -> HostState {
        HostState::new(self.read_guard().clone(), self.language.clone())
    }

    fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

impl CommandDispatcher for LocalHost {
    fn dispatch(&self, call: &ServiceCall) {
        if self.apply(call) {
            self.generation.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn read_snapshot(path: &Path) -> Result<Snapshot> {
    if !path.exists() {
        tracing::warn!("Snapshot file {} not found, starting empty", path.display());
        return Ok(Snapshot::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid snapshot file {}", path.display()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sunseeker_zone_card_core::types::Entity;

    fn host() -> LocalHost {
        let snapshot: Snapshot = [
            Entity::new("select.z_speed", "Slow"),
            Entity::new("number.z_width", "20"),
            Entity::new("switch.z_edge", "off"),
        ]
        .into_iter()
        .collect();
        LocalHost::new(snapshot, Some("de".into()))
    }

    #[test]
    fn dispatch_updates_state_and_generation() {
        let host = host();
        let before = host.generation();

        host.dispatch(&ServiceCall::select_option("select.z_speed", "Fast"));
        host.dispatch(&ServiceCall::set_value("number.z_width", 25.0));
        host.dispatch(&ServiceCall::turn("switch.z_edge", true));

        let state = host.host_state();
        assert_eq!(state.snapshot.get("select.z_speed").unwrap().state, "Fast");
        assert_eq!(state.snapshot.get("number.z_width").unwrap().state, "25");
        assert_eq!(state.snapshot.get("switch.z_edge").unwrap().state, "on");
        assert_eq!(state.language.as_deref(), Some("de"));
        assert_eq!(host.generation(), before + 3);
    }

    #[test]
    fn unknown_entity_leaves_generation() {
        let host = host();
        let before = host.generation();

        host.dispatch(&ServiceCall::turn("switch.missing", true));

        assert_eq!(host.generation(), before);
    }

    #[test]
    fn open_and_reload_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("states.json");
        fs::write(
            &path,
            r#"{"select.z_speed": {"state": "Slow", "attributes": {"options": ["Slow", "Fast"]}}}"#,
        )
        .unwrap();

        let host = LocalHost::open(&path, None).unwrap();
        let state = host.host_state();
        assert_eq!(state.snapshot.get("select.z_speed").unwrap().entity_id, "select.z_speed");

        fs::write(&path, r#"{"switch.a": {"state": "on"}, "switch.b": {"state": "off"}}"#).unwrap();
        let generation = host.generation();
        assert_eq!(host.reload().unwrap(), 2);
        assert_eq!(host.generation(), generation + 1);
    }

    #[test]
    fn missing_file_is_empty_and_bad_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let host = LocalHost::open(&dir.path().join("none.json"), None).unwrap();
        assert!(host.host_state().snapshot.is_empty());

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "[1, 2").unwrap();
        assert!(LocalHost::open(&bad, None).is_err());
    }
}
