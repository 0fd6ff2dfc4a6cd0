//! Cache client construction.
//!
//! # Responsibilities
//! - Turn a configured URL into a client handle
//! - Leave connection establishment to the client itself
//! - Provide an explicit health check for startup diagnostics

use crate::cache::types::{CacheError, CacheResult};

/// Constructs cache clients from a connection URL.
pub trait CacheConnector {
    type Client;

    /// Build a client for `url`. Must not be retried by the caller.
    fn open(&self, url: &str) -> CacheResult<Self::Client>;
}

/// Opens Valkey/Redis clients with the `redis` crate.
///
/// `redis::Client::open` only parses the URL; no socket is opened until a
/// connection is requested from the client.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValkeyConnector;

impl CacheConnector for ValkeyConnector {
    type Client = redis::Client;

    fn open(&self, url: &str) -> CacheResult<redis::Client> {
        // The client library only knows the redis schemes.
        let url = normalize_scheme(url);
        Ok(redis::Client::open(url.as_str())?)
    }
}

fn normalize_scheme(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("valkeys://") {
        format!("rediss://{}", rest)
    } else if let Some(rest) = url.strip_prefix("valkey://") {
        format!("redis://{}", rest)
    } else {
        url.to_string()
    }
}

/// Connect to the server behind `client` and send `PING`.
pub async fn ping(client: &redis::Client) -> CacheResult<()> {
    let mut conn = client.get_multiplexed_async_connection().await?;
    let reply: String = redis::cmd("PING").query_async(&mut conn).await?;
    if reply == "PONG" {
        Ok(())
    } else {
        Err(CacheError::UnexpectedResponse(reply))
    }
}
