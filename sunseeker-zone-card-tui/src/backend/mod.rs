//! Backend layer
//!
//! Host platform stand-ins behind the core traits:
//! - `LocalHost`: `StateProvider` + `CommandDispatcher` over a snapshot file
//! - `JsonFileConfigStore`: `ConfigStore` over a JSON file
//! - `Settings`: file locations and host language from the environment

mod config_store;
mod local_host;
mod settings;

pub use config_store::JsonFileConfigStore;
pub use local_host::LocalHost;
pub use settings::{Settings, LOG_VAR};
