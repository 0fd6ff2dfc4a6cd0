//! Process-wide owner of the resolved configuration.
//!
//! # Lifecycle
//! - First `get_config()` resolves lazily and caches the snapshot
//! - `reload()` drops the cache and resolves again from current state
//! - `has_config_file()` only checks existence, it never touches the cache
//!
//! Reads are lock-free. Resolution takes a single writer lock so a reload
//! and a lazy first resolution never interleave.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwapOption;

use crate::config::loader::{self, ConfigError, DEFAULT_CONFIG_FILE};
use crate::config::schema::ConfigSnapshot;
use crate::config::sources::{ConfigFileSource, DiskFiles, EnvSource, ProcessEnv};
use crate::observability::metrics;

/// Owns the cached `ConfigSnapshot` and the sources it is resolved from.
pub struct ConfigManager {
    path: PathBuf,
    env: Arc<dyn EnvSource>,
    files: Arc<dyn ConfigFileSource>,
    current: ArcSwapOption<ConfigSnapshot>,
    resolve_lock: Mutex<()>,
}

impl ConfigManager {
    /// Manager over the process environment and `logchimp.config.json` in the
    /// working directory.
    pub fn new() -> Self {
        Self::with_path(DEFAULT_CONFIG_FILE)
    }

    /// Manager over the process environment and the config file at `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self::with_sources(path, Arc::new(ProcessEnv), Arc::new(DiskFiles))
    }

    /// Manager over caller-supplied sources.
    pub fn with_sources(
        path: impl Into<PathBuf>,
        env: Arc<dyn EnvSource>,
        files: Arc<dyn ConfigFileSource>,
    ) -> Self {
        Self {
            path: path.into(),
            env,
            files,
            current: ArcSwapOption::empty(),
            resolve_lock: Mutex::new(()),
        }
    }

    /// Path of the config file this manager looks for.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The cached snapshot, resolving it first if nothing is cached.
    pub fn get_config(&self) -> Result<Arc<ConfigSnapshot>, ConfigError> {
        if let Some(config) = self.current.load_full() {
            return Ok(config);
        }

        let _guard = self.resolve_lock.lock().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have resolved while we waited.
        if let Some(config) = self.current.load_full() {
            return Ok(config);
        }
        self.resolve_locked()
    }

    /// Whether the config file exists right now.
    pub fn has_config_file(&self) -> bool {
        self.files.exists(&self.path)
    }

    /// Whether a snapshot is currently cached.
    pub fn is_resolved(&self) -> bool {
        self.current.load().is_some()
    }

    /// Drop the cached snapshot; the next `get_config()` resolves again.
    pub fn invalidate(&self) {
        let _guard = self.resolve_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.current.store(None);
    }

    /// Drop the cached snapshot and resolve a fresh one from current state.
    ///
    /// On failure nothing stays cached, so later `get_config()` calls retry
    /// and report the error again instead of serving stale values.
    pub fn reload(&self) -> Result<Arc<ConfigSnapshot>, ConfigError> {
        let _guard = self.resolve_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.current.store(None);
        metrics::record_config_reload();
        tracing::info!(path = %self.path.display(), "Reloading configuration");
        self.resolve_locked()
    }

    fn resolve_locked(&self) -> Result<Arc<ConfigSnapshot>, ConfigError> {
        match loader::resolve(self.env.as_ref(), self.files.as_ref(), &self.path) {
            Ok(config) => {
                let config = Arc::new(config);
                self.current.store(Some(Arc::clone(&config)));
                metrics::record_config_resolution("ok");
                Ok(config)
            }
            Err(e) => {
                metrics::record_config_resolution("error");
                tracing::error!(error = %e, path = %self.path.display(), "Failed to resolve configuration");
                Err(e)
            }
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
