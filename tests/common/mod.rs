//! Shared utilities for integration tests.

use std::path::PathBuf;
use std::sync::Arc;

use logchimp::config::{ConfigFileSource, ConfigManager, DiskFiles, EnvSource, MapEnv};

/// A temp directory holding (or not yet holding) a config file.
pub struct ConfigDir {
    dir: tempfile::TempDir,
}

impl ConfigDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("logchimp.config.json")
    }

    /// Write the config file with `content`, verbatim.
    pub fn write(&self, content: &str) {
        std::fs::write(self.config_path(), content).unwrap();
    }
}

/// Build a manager over `env` and the real filesystem.
pub fn manager(dir: &ConfigDir, env: &Arc<MapEnv>) -> ConfigManager {
    ConfigManager::with_sources(
        dir.config_path(),
        Arc::clone(env) as Arc<dyn EnvSource>,
        Arc::new(DiskFiles) as Arc<dyn ConfigFileSource>,
    )
}

pub fn env(vars: &[(&str, &str)]) -> Arc<MapEnv> {
    Arc::new(vars.iter().copied().collect())
}
