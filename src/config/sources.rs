//! Injectable inputs for configuration resolution.
//!
//! The resolver never touches `std::env` or the filesystem directly; it goes
//! through these traits so embedders and tests can substitute their own.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use serde_json::Value;

use crate::config::loader::ConfigError;

/// Source of environment variables.
pub trait EnvSource: Send + Sync {
    /// Raw value of `name`, or `None` when unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// An in-memory environment.
///
/// Values can be changed after construction, which lets a caller drive
/// `ConfigManager::reload` without mutating the process environment.
#[derive(Debug, Default)]
pub struct MapEnv {
    vars: Mutex<HashMap<String, String>>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        self.vars
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), value.into());
    }

    pub fn remove(&self, name: &str) {
        self.vars
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: Mutex::new(vars),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }
}

/// Access to the structured config file.
pub trait ConfigFileSource: Send + Sync {
    /// Whether something exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read and parse `path` as JSON. Unreadable or invalid content is an error.
    fn read_json(&self, path: &Path) -> Result<Value, ConfigError>;
}

/// Reads config files from local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFiles;

impl ConfigFileSource for DiskFiles {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_json(&self, path: &Path) -> Result<Value, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
