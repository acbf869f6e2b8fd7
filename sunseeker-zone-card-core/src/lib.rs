//! Sunseeker Zone Card Core Library
//!
//! Platform-independent logic behind the mowing-zone card:
//! - Zone directory (zone names from the zone-list entity)
//! - Entity matcher (naming-prefix heuristic)
//! - Value presenter and translation table
//! - Edit session (staged batch edits)
//! - View reconciler (rebuild vs. in-place patch)
//! - Card controller and configuration editor
//!
//! The host platform is reached only through the traits in [`traits`], so the
//! same core drives the terminal front end and the tests.

pub mod error;
pub mod i18n;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CardError, CardResult};
pub use services::{CardEditor, ZoneCard};
pub use traits::{CommandDispatcher, ConfigStore, StateProvider};
