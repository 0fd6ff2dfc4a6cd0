//! Cache bootstrap subsystem.
//!
//! # Data Flow
//! ```text
//! ConfigManager::get_config()
//!     → gate.rs (read cache_url once)
//!     → empty: cache disabled, no client
//!     → otherwise: connector.rs opens a client for the URL
//! ```
//!
//! # Design Decisions
//! - The decision is made once at startup, not per request
//! - The gate never connects; the client does that on first use
//! - Construction errors propagate; no retry, no silent fallback to disabled

pub mod connector;
pub mod gate;
pub mod types;

pub use connector::{CacheConnector, ValkeyConnector};
pub use gate::CacheGate;
pub use types::{CacheError, CacheResult};
