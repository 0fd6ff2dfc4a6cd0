//! OS signal handling.
//!
//! SIGHUP triggers a config reload, never a shutdown. A failed reload is
//! logged and the handler keeps listening.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::{ConfigManager, ConfigSnapshot};

/// Reload `manager` on every SIGHUP until the receiving side goes away.
#[cfg(unix)]
pub async fn reload_on_sighup(
    manager: Arc<ConfigManager>,
    updates: mpsc::UnboundedSender<Arc<ConfigSnapshot>>,
) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangup = signal(SignalKind::hangup())?;
    while hangup.recv().await.is_some() {
        tracing::info!("SIGHUP received, reloading configuration");
        match manager.reload() {
            Ok(config) => {
                if updates.send(config).is_err() {
                    break;
                }
            }
            Err(e) => tracing::error!(error = %e, "Reload on SIGHUP failed"),
        }
    }
    Ok(())
}

#[cfg(not(unix))]
pub async fn reload_on_sighup(
    _manager: Arc<ConfigManager>,
    _updates: mpsc::UnboundedSender<Arc<ConfigSnapshot>>,
) -> std::io::Result<()> {
    std::future::pending::<()>().await;
    Ok(())
}
