//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! LOGCHIMP_* environment variables
//!     → loader.rs (defaults & type coercion)
//! logchimp.config.json (optional)
//!     → loader.rs (parse, overlay per field: file wins)
//!     → validation.rs (semantic checks)
//!     → ConfigSnapshot (validated, immutable)
//!     → cached by manager.rs, shared via Arc
//!
//! On reload (manual, watcher.rs, or SIGHUP):
//!     manager.rs drops the cached snapshot
//!     → loader.rs resolves again from current state
//!     → atomic swap of Arc<ConfigSnapshot>
//! ```
//!
//! # Design Decisions
//! - Snapshot is immutable once resolved; changes require full reload
//! - Missing inputs fall back to defaults, malformed inputs are errors
//! - Environment and file access are injected through `sources.rs` traits

pub mod loader;
pub mod manager;
pub mod schema;
pub mod sources;
pub mod validation;
pub mod watcher;

#[cfg(test)]
pub(crate) mod testing;

pub use loader::{ConfigError, DEFAULT_CONFIG_FILE};
pub use manager::ConfigManager;
pub use schema::{ConfigSnapshot, FileConfig};
pub use sources::{ConfigFileSource, DiskFiles, EnvSource, MapEnv, ProcessEnv};
pub use validation::ValidationError;
