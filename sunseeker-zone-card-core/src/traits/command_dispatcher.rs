//! Command dispatch abstract Trait

use crate::types::ServiceCall;

/// Command Dispatcher Trait
///
/// Fire-and-forget: the card neither awaits nor retries a call. Failures are
/// surfaced by the platform, and the next snapshot restores consistency.
pub trait CommandDispatcher: Send + Sync {
    /// Send one service call to the platform
    ///
    /// # Arguments
    /// * `call` - domain, service, entity id and payload
    fn dispatch(&self, call: &ServiceCall);
}
