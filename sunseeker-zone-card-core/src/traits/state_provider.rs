//! State provider abstract Trait

use crate::types::HostState;

/// State Provider Trait
///
/// The host pushes its state wholesale; a provider only ever hands out complete
/// snapshots, never partial updates.
pub trait StateProvider: Send + Sync {
    /// Current snapshot and active language
    fn host_state(&self) -> HostState;

    /// Monotonic counter bumped on every pushed change
    fn generation(&self) -> u64;
}
