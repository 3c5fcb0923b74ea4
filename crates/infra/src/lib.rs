//! Infrastructure layer: item storage and configuration.

pub mod config;
pub mod item_store;

pub use config::{ConfigError, ServerConfig};
pub use item_store::{InMemoryItemStore, ItemStore};
