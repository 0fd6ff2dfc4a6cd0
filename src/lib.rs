//! LogChimp runtime configuration and cache bootstrap.

pub mod cache;
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use cache::{CacheGate, ValkeyConnector};
pub use config::{ConfigManager, ConfigSnapshot};
pub use lifecycle::{bootstrap, AppContext};
