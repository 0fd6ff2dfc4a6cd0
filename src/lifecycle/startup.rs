//! Startup orchestration.
//!
//! # Responsibilities
//! - Resolve and validate configuration
//! - Initialize the cache gate from the resolved configuration
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently

use std::sync::Arc;

use thiserror::Error;

use crate::cache::{CacheConnector, CacheError, CacheGate};
use crate::config::{ConfigError, ConfigManager};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Everything the server needs after startup.
pub struct AppContext<C> {
    pub config: Arc<ConfigManager>,
    pub cache: CacheGate<C>,
}

/// Resolve the configuration, then decide the cache gate.
pub fn bootstrap<K: CacheConnector>(
    config: Arc<ConfigManager>,
    connector: &K,
) -> Result<AppContext<K::Client>, StartupError> {
    let snapshot = config.get_config()?;
    if !config.has_config_file() {
        tracing::info!(path = %config.path().display(), "No config file found, using environment");
    }

    let cache = CacheGate::from_snapshot(&snapshot, connector)?;

    tracing::info!(
        server_host = %snapshot.server_host,
        server_port = snapshot.server_port,
        cache_active = cache.is_active(),
        "Startup complete"
    );

    Ok(AppContext { config, cache })
}
