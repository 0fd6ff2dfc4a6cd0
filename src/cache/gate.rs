//! One-time decision on whether the cache subsystem is enabled.

use crate::cache::connector::CacheConnector;
use crate::cache::types::CacheResult;
use crate::config::{ConfigManager, ConfigSnapshot};
use crate::observability::metrics;

/// The cache handle exposed to the rest of the server.
///
/// Either active with a client, or inactive with none. The decision is made
/// once, in [`CacheGate::init`]; later config reloads do not change it.
#[derive(Debug)]
pub struct CacheGate<C> {
    client: Option<C>,
}

impl<C> CacheGate<C> {
    /// Read the current config from `config` and decide.
    pub fn init<K>(config: &ConfigManager, connector: &K) -> CacheResult<Self>
    where
        K: CacheConnector<Client = C>,
    {
        let snapshot = config.get_config()?;
        Self::from_snapshot(&snapshot, connector)
    }

    /// Decide from an already-resolved snapshot.
    ///
    /// An empty cache URL disables the cache without calling `connector`.
    /// Otherwise `connector` is called exactly once with the URL and any
    /// error it returns is passed through untouched.
    pub fn from_snapshot<K>(config: &ConfigSnapshot, connector: &K) -> CacheResult<Self>
    where
        K: CacheConnector<Client = C>,
    {
        if !config.cache_enabled() {
            tracing::info!("Cache disabled: no cache url configured");
            metrics::record_cache_active(false);
            return Ok(Self::disabled());
        }

        let client = connector.open(&config.cache_url)?;
        tracing::info!(host = ?cache_host(&config.cache_url), "Cache client created");
        metrics::record_cache_active(true);
        Ok(Self {
            client: Some(client),
        })
    }

    /// A gate with the cache turned off.
    pub fn disabled() -> Self {
        Self { client: None }
    }

    pub fn is_active(&self) -> bool {
        self.client.is_some()
    }

    pub fn client(&self) -> Option<&C> {
        self.client.as_ref()
    }

    pub fn into_client(self) -> Option<C> {
        self.client
    }
}

// Log only the host; the URL may carry credentials.
fn cache_host(raw: &str) -> Option<String> {
    url::Url::parse(raw)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
}
