//! End-to-end configuration resolution against real files.

use logchimp::config::ConfigError;

mod common;

use common::{env, manager, ConfigDir};

#[test]
fn test_loads_config_from_env() {
    let dir = ConfigDir::new();
    let env = env(&[
        ("LOGCHIMP_SECRET_KEY", "secret"),
        ("LOGCHIMP_API_HOST", "localhost"),
        ("LOGCHIMP_SERVER_PORT", "3000"),
        ("LOGCHIMP_VALKEY_URL", "redis://test"),
    ]);

    let config = manager(&dir, &env).get_config().unwrap();
    assert_eq!(config.secret_key, "secret");
    assert_eq!(config.server_host, "localhost");
    assert_eq!(config.server_port, 3000);
    assert_eq!(config.cache_url, "redis://test");
}

#[test]
fn test_has_config_file() {
    let dir = ConfigDir::new();
    let manager = manager(&dir, &env(&[]));
    assert!(!manager.has_config_file());

    dir.write("{}");
    assert!(manager.has_config_file());
    assert!(!manager.is_resolved());

    manager.get_config().unwrap();
    assert!(manager.has_config_file());

    std::fs::remove_file(dir.config_path()).unwrap();
    assert!(!manager.has_config_file());
    assert!(manager.is_resolved());
}

#[test]
fn test_loads_config_from_file() {
    let dir = ConfigDir::new();
    dir.write(
        r#"{
            "server": { "host": "from-file", "port": 3001 },
            "cache": { "url": "redis://file" }
        }"#,
    );

    let config = manager(&dir, &env(&[])).get_config().unwrap();
    assert_eq!(config.server_host, "from-file");
    assert_eq!(config.server_port, 3001);
    assert_eq!(config.cache_url, "redis://file");
    assert_eq!(config.config_file, Some(dir.config_path()));
}

#[test]
fn test_file_overrides_env() {
    let dir = ConfigDir::new();
    dir.write(
        r#"{
            "server": { "host": "from-file" },
            "cache": { "url": "redis://file" }
        }"#,
    );
    let env = env(&[
        ("LOGCHIMP_VALKEY_URL", "redis://env"),
        ("LOGCHIMP_SERVER_PORT", "3000"),
    ]);

    let config = manager(&dir, &env).get_config().unwrap();
    assert_eq!(config.server_host, "from-file");
    assert_eq!(config.cache_url, "redis://file");
    assert_eq!(config.server_port, 3000);
}

#[test]
fn test_reload_refreshes_configuration() {
    let dir = ConfigDir::new();
    let env = env(&[("LOGCHIMP_VALKEY_URL", "redis://first")]);
    let manager = manager(&dir, &env);

    assert_eq!(manager.get_config().unwrap().cache_url, "redis://first");

    env.set("LOGCHIMP_VALKEY_URL", "redis://second");
    manager.reload().unwrap();
    assert_eq!(manager.get_config().unwrap().cache_url, "redis://second");
}

#[test]
fn test_parses_db_ssl() {
    let dir = ConfigDir::new();
    let config = manager(&dir, &env(&[("LOGCHIMP_DB_SSL", "true")]))
        .get_config()
        .unwrap();
    assert!(config.database_ssl);

    let config = manager(&dir, &env(&[("LOGCHIMP_DB_SSL", "false")]))
        .get_config()
        .unwrap();
    assert!(!config.database_ssl);
}

#[test]
fn test_database_and_mail_sections() {
    let dir = ConfigDir::new();
    dir.write(
        r#"{
            "database": { "host": "db", "port": 6543, "name": "logchimp" },
            "mail": { "host": "smtp.example.com", "port": 465 }
        }"#,
    );
    let env = env(&[("LOGCHIMP_DB_USER", "chimp"), ("LOGCHIMP_DB_HOST", "env-db")]);

    let config = manager(&dir, &env).get_config().unwrap();
    assert_eq!(config.database_host, "db");
    assert_eq!(config.database_port, 6543);
    assert_eq!(config.database_name, "logchimp");
    assert_eq!(config.database_user, "chimp");
    assert_eq!(config.mail_host, "smtp.example.com");
    assert_eq!(config.mail_port, 465);
}

#[test]
fn test_malformed_file_fails_loudly() {
    let dir = ConfigDir::new();
    dir.write(r#"{ "server": { "host": "from-file", "#);
    let manager = manager(&dir, &env(&[("LOGCHIMP_VALKEY_URL", "redis://env")]));

    let err = manager.get_config().unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("logchimp.config.json"));
    assert!(manager.reload().is_err());

    // Fixing the file and reloading recovers.
    dir.write(r#"{ "server": { "host": "from-file" } }"#);
    assert_eq!(manager.reload().unwrap().server_host, "from-file");
}

#[test]
fn test_non_numeric_port_is_an_error() {
    let dir = ConfigDir::new();
    let manager = manager(&dir, &env(&[("LOGCHIMP_SERVER_PORT", "abc")]));
    assert!(matches!(
        manager.get_config(),
        Err(ConfigError::InvalidEnv { var: "LOGCHIMP_SERVER_PORT", .. })
    ));
}
