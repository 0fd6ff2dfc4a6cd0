//! Configuration file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::manager::ConfigManager;
use crate::config::schema::ConfigSnapshot;

/// A watcher that reloads a `ConfigManager` when its config file changes.
pub struct ConfigWatcher {
    manager: Arc<ConfigManager>,
    update_tx: mpsc::UnboundedSender<Arc<ConfigSnapshot>>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for reloaded snapshots.
    pub fn new(manager: Arc<ConfigManager>) -> (Self, mpsc::UnboundedReceiver<Arc<ConfigSnapshot>>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        (Self { manager, update_tx }, update_rx)
    }

    /// Start watching in a background thread.
    ///
    /// The parent directory is watched rather than the file itself, so the
    /// file may be created, replaced or removed after startup. The returned
    /// handle must be kept alive for as long as reloads are wanted.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let file_path = self.manager.path().to_path_buf();
        let dir = watch_dir(&file_path);
        let manager = Arc::clone(&self.manager);
        let tx = self.update_tx.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    let relevant = event.kind.is_modify()
                        || event.kind.is_create()
                        || event.kind.is_remove();
                    if !relevant || !touches(&event, &file_path) {
                        return;
                    }

                    tracing::info!("Config file change detected, reloading...");
                    match manager.reload() {
                        Ok(config) => {
                            let _ = tx.send(config);
                        }
                        Err(e) => {
                            tracing::error!("Failed to reload config: {}", e);
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.manager.path(), "Config watcher started");
        Ok(watcher)
    }
}

fn watch_dir(file: &Path) -> PathBuf {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn touches(event: &Event, file: &Path) -> bool {
    let Some(name) = file.file_name() else {
        return false;
    };
    event.paths.iter().any(|p| p.file_name() == Some(name))
}
