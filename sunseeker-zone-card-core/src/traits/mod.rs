//! Host platform abstraction trait definition

mod command_dispatcher;
mod config_store;
mod state_provider;

pub use command_dispatcher::CommandDispatcher;
pub use config_store::{ConfigStore, InMemoryConfigStore};
pub use state_provider::StateProvider;
