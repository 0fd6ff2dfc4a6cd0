//! Configuration schema definitions.
//!
//! `ConfigSnapshot` is the resolved, immutable view handed to the rest of the
//! server. `FileConfig` mirrors the recognized shape of `logchimp.config.json`;
//! every leaf is optional so a file can override any subset of fields.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default API bind host when neither the environment nor the file sets one.
pub const DEFAULT_SERVER_HOST: &str = "localhost";

/// Default API port.
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default PostgreSQL host.
pub const DEFAULT_DATABASE_HOST: &str = "localhost";

/// Default PostgreSQL port.
pub const DEFAULT_DATABASE_PORT: u16 = 5432;

/// Default SMTP submission port.
pub const DEFAULT_MAIL_PORT: u16 = 587;

const REDACTED: &str = "********";

/// One fully-resolved configuration value.
///
/// Built by merging environment variables with the optional config file.
/// Never mutated after resolution; a reload produces a new snapshot.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSnapshot {
    /// Token signing secret. Environment only.
    pub secret_key: String,

    /// API bind host.
    pub server_host: String,

    /// API bind port.
    pub server_port: u16,

    /// Public URL of the web frontend.
    pub web_url: String,

    /// Valkey/Redis connection URL. Empty means the cache is disabled.
    pub cache_url: String,

    pub database_host: String,
    pub database_port: u16,
    pub database_user: String,
    pub database_password: String,
    pub database_name: String,

    /// Whether to require TLS for the database connection. Environment only.
    pub database_ssl: bool,

    pub mail_service: String,
    pub mail_host: String,
    pub mail_user: String,
    pub mail_password: String,
    pub mail_port: u16,

    /// Config file merged into this snapshot, if one existed at resolution time.
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

impl Default for ConfigSnapshot {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            web_url: String::new(),
            cache_url: String::new(),
            database_host: DEFAULT_DATABASE_HOST.to_string(),
            database_port: DEFAULT_DATABASE_PORT,
            database_user: String::new(),
            database_password: String::new(),
            database_name: String::new(),
            database_ssl: false,
            mail_service: String::new(),
            mail_host: String::new(),
            mail_user: String::new(),
            mail_password: String::new(),
            mail_port: DEFAULT_MAIL_PORT,
            config_file: None,
        }
    }
}

impl ConfigSnapshot {
    /// Whether a cache URL is configured.
    pub fn cache_enabled(&self) -> bool {
        !self.cache_url.is_empty()
    }

    /// Copy of the snapshot with secrets masked, for display.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        for secret in [
            &mut copy.secret_key,
            &mut copy.database_password,
            &mut copy.mail_password,
        ] {
            if !secret.is_empty() {
                *secret = REDACTED.to_string();
            }
        }
        copy.cache_url = redact_url_password(&copy.cache_url);
        copy
    }
}

// Hand-written so secrets never end up in logs via `{:?}`.
impl fmt::Debug for ConfigSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.redacted();
        f.debug_struct("ConfigSnapshot")
            .field("secret_key", &shown.secret_key)
            .field("server_host", &shown.server_host)
            .field("server_port", &shown.server_port)
            .field("web_url", &shown.web_url)
            .field("cache_url", &shown.cache_url)
            .field("database_host", &shown.database_host)
            .field("database_port", &shown.database_port)
            .field("database_user", &shown.database_user)
            .field("database_password", &shown.database_password)
            .field("database_name", &shown.database_name)
            .field("database_ssl", &shown.database_ssl)
            .field("mail_service", &shown.mail_service)
            .field("mail_host", &shown.mail_host)
            .field("mail_user", &shown.mail_user)
            .field("mail_password", &shown.mail_password)
            .field("mail_port", &shown.mail_port)
            .field("config_file", &shown.config_file)
            .finish()
    }
}

fn redact_url_password(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(mut parsed) if parsed.password().is_some() => {
            if parsed.set_password(Some(REDACTED)).is_err() {
                return REDACTED.to_string();
            }
            parsed.to_string()
        }
        _ => raw.to_string(),
    }
}

/// Recognized contents of `logchimp.config.json`.
///
/// Unknown keys are ignored. A recognized key with the wrong JSON type is a
/// parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
    pub mail: MailSection,
    pub cache: CacheSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub web_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MailSection {
    pub service: Option<String>,
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CacheSection {
    pub url: Option<String>,
}

impl FileConfig {
    /// Overlay every field the file defines onto `snapshot`.
    pub fn apply(self, snapshot: &mut ConfigSnapshot) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        set(&mut snapshot.server_host, self.server.host);
        set(&mut snapshot.server_port, self.server.port);
        set(&mut snapshot.web_url, self.server.web_url);

        set(&mut snapshot.database_host, self.database.host);
        set(&mut snapshot.database_port, self.database.port);
        set(&mut snapshot.database_user, self.database.user);
        set(&mut snapshot.database_password, self.database.password);
        set(&mut snapshot.database_name, self.database.name);

        set(&mut snapshot.mail_service, self.mail.service);
        set(&mut snapshot.mail_host, self.mail.host);
        set(&mut snapshot.mail_user, self.mail.user);
        set(&mut snapshot.mail_password, self.mail.password);
        set(&mut snapshot.mail_port, self.mail.port);

        set(&mut snapshot.cache_url, self.cache.url);
    }
}
