//! Configuration resolution from the environment and the config file.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::{ConfigSnapshot, FileConfig};
use crate::config::sources::{ConfigFileSource, EnvSource};
use crate::config::validation::{validate_snapshot, ValidationError};

/// Conventional config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "logchimp.config.json";

pub const ENV_SECRET_KEY: &str = "LOGCHIMP_SECRET_KEY";
pub const ENV_API_HOST: &str = "LOGCHIMP_API_HOST";
pub const ENV_SERVER_PORT: &str = "LOGCHIMP_SERVER_PORT";
pub const ENV_WEB_URL: &str = "LOGCHIMP_WEB_URL";
pub const ENV_VALKEY_URL: &str = "LOGCHIMP_VALKEY_URL";
pub const ENV_DB_HOST: &str = "LOGCHIMP_DB_HOST";
pub const ENV_DB_PORT: &str = "LOGCHIMP_DB_PORT";
pub const ENV_DB_USER: &str = "LOGCHIMP_DB_USER";
pub const ENV_DB_PASSWORD: &str = "LOGCHIMP_DB_PASSWORD";
pub const ENV_DB_DATABASE: &str = "LOGCHIMP_DB_DATABASE";
pub const ENV_DB_SSL: &str = "LOGCHIMP_DB_SSL";
pub const ENV_MAIL_SERVICE: &str = "LOGCHIMP_MAIL_SERVICE";
pub const ENV_MAIL_HOST: &str = "LOGCHIMP_MAIL_HOST";
pub const ENV_MAIL_USER: &str = "LOGCHIMP_MAIL_USER";
pub const ENV_MAIL_PASSWORD: &str = "LOGCHIMP_MAIL_PASSWORD";
pub const ENV_MAIL_PORT: &str = "LOGCHIMP_MAIL_PORT";

/// Error type for configuration resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON or has a recognized key of the wrong type.
    #[error("invalid config file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// An environment variable could not be coerced to its field type.
    #[error("environment variable {var} has invalid value {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    /// The merged configuration failed semantic checks.
    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve a snapshot: environment first, then the file (if present) wins per field.
pub fn resolve(
    env: &dyn EnvSource,
    files: &dyn ConfigFileSource,
    path: &Path,
) -> Result<ConfigSnapshot, ConfigError> {
    let mut config = from_env(env)?;

    if files.exists(path) {
        let raw = files.read_json(path)?;
        let file: FileConfig = serde_json::from_value(raw).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.apply(&mut config);
        config.config_file = Some(path.to_path_buf());
    } else {
        tracing::debug!(path = %path.display(), "No config file, using environment only");
    }

    validate_snapshot(&config).map_err(ConfigError::Validation)?;

    tracing::info!(
        config_file = ?config.config_file,
        server_host = %config.server_host,
        server_port = config.server_port,
        cache_enabled = config.cache_enabled(),
        database_ssl = config.database_ssl,
        "Configuration resolved"
    );

    Ok(config)
}

/// Build the environment-derived base settings, with defaults for anything unset.
pub fn from_env(env: &dyn EnvSource) -> Result<ConfigSnapshot, ConfigError> {
    let defaults = ConfigSnapshot::default();

    Ok(ConfigSnapshot {
        secret_key: env_string(env, ENV_SECRET_KEY).unwrap_or(defaults.secret_key),
        server_host: env_string(env, ENV_API_HOST).unwrap_or(defaults.server_host),
        server_port: env_port(env, ENV_SERVER_PORT)?.unwrap_or(defaults.server_port),
        web_url: env_string(env, ENV_WEB_URL).unwrap_or(defaults.web_url),
        cache_url: env_string(env, ENV_VALKEY_URL).unwrap_or(defaults.cache_url),
        database_host: env_string(env, ENV_DB_HOST).unwrap_or(defaults.database_host),
        database_port: env_port(env, ENV_DB_PORT)?.unwrap_or(defaults.database_port),
        database_user: env_string(env, ENV_DB_USER).unwrap_or(defaults.database_user),
        database_password: env_string(env, ENV_DB_PASSWORD).unwrap_or(defaults.database_password),
        database_name: env_string(env, ENV_DB_DATABASE).unwrap_or(defaults.database_name),
        database_ssl: env_flag(env, ENV_DB_SSL),
        mail_service: env_string(env, ENV_MAIL_SERVICE).unwrap_or(defaults.mail_service),
        mail_host: env_string(env, ENV_MAIL_HOST).unwrap_or(defaults.mail_host),
        mail_user: env_string(env, ENV_MAIL_USER).unwrap_or(defaults.mail_user),
        mail_password: env_string(env, ENV_MAIL_PASSWORD).unwrap_or(defaults.mail_password),
        mail_port: env_port(env, ENV_MAIL_PORT)?.unwrap_or(defaults.mail_port),
        config_file: None,
    })
}

// An empty variable counts as unset.
fn env_string(env: &dyn EnvSource, var: &str) -> Option<String> {
    env.var(var).filter(|value| !value.is_empty())
}

fn env_port(env: &dyn EnvSource, var: &'static str) -> Result<Option<u16>, ConfigError> {
    match env_string(env, var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { var, value: raw }),
    }
}

/// Only the exact string `"true"` enables a flag.
fn env_flag(env: &dyn EnvSource, var: &str) -> bool {
    env.var(var).as_deref() == Some("true")
}
