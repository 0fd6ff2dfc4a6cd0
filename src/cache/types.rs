//! Cache-specific error definitions.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while bootstrapping the cache client.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The configuration the gate reads from could not be resolved.
    #[error("cache configuration unavailable: {0}")]
    Config(#[from] ConfigError),

    /// The client library rejected the URL or failed to talk to the server.
    #[error("cache client error: {0}")]
    Client(#[from] redis::RedisError),

    /// The server answered a health check with something unexpected.
    #[error("unexpected cache response: {0}")]
    UnexpectedResponse(String),
}

/// Result type for cache bootstrap operations.
pub type CacheResult<T> = Result<T, CacheError>;
