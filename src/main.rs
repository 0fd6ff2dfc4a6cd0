//! LogChimp configuration tool.
//!
//! ```text
//! logchimp [--config <PATH>] check [--ping]   resolve, validate, report cache state
//! logchimp [--config <PATH>] show             print the resolved config (secrets masked)
//! logchimp [--config <PATH>] watch            reload on file change or SIGHUP until Ctrl-C
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use logchimp::cache::connector::ping;
use logchimp::config::watcher::ConfigWatcher;
use logchimp::config::{ConfigManager, DEFAULT_CONFIG_FILE};
use logchimp::lifecycle::signals::reload_on_sighup;
use logchimp::observability::logging::init_logging;
use logchimp::{bootstrap, ValkeyConnector};

#[derive(Parser)]
#[command(name = "logchimp")]
#[command(about = "Resolve and inspect LogChimp server configuration", long_about = None)]
struct Cli {
    /// Path to the JSON config file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve and validate configuration, report cache state
    Check {
        /// Also connect to the cache and send PING
        #[arg(long)]
        ping: bool,
    },
    /// Print the resolved configuration as JSON
    Show,
    /// Keep the configuration resolved, reloading on change
    Watch,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();
    let manager = Arc::new(ConfigManager::with_path(cli.config));

    match cli.command {
        Commands::Check { ping: do_ping } => {
            let file_present = manager.has_config_file();
            let ctx = bootstrap(Arc::clone(&manager), &ValkeyConnector)?;

            println!(
                "config file: {} ({})",
                manager.path().display(),
                if file_present { "found" } else { "not found, environment only" }
            );
            println!("configuration: ok");

            match ctx.cache.client() {
                Some(client) if do_ping => {
                    ping(client).await?;
                    println!("cache: active, PING ok");
                }
                Some(_) => println!("cache: active"),
                None => println!("cache: disabled"),
            }
        }
        Commands::Show => {
            let config = manager.get_config()?;
            println!("{}", serde_json::to_string_pretty(&config.redacted())?);
        }
        Commands::Watch => {
            let ctx = bootstrap(Arc::clone(&manager), &ValkeyConnector)?;
            let initial_cache_url = manager.get_config()?.cache_url.clone();

            let (watcher, mut updates) = ConfigWatcher::new(Arc::clone(&manager));
            let _watch_handle = watcher.run()?;

            let (signal_tx, mut signal_updates) = tokio::sync::mpsc::unbounded_channel();
            tokio::spawn(reload_on_sighup(Arc::clone(&manager), signal_tx));

            loop {
                let config = tokio::select! {
                    Some(config) = updates.recv() => config,
                    Some(config) = signal_updates.recv() => config,
                    _ = tokio::signal::ctrl_c() => break,
                };

                tracing::info!(
                    server_host = %config.server_host,
                    server_port = config.server_port,
                    "Configuration reloaded"
                );
                if config.cache_url != initial_cache_url {
                    tracing::warn!(
                        cache_active = ctx.cache.is_active(),
                        "Cache url changed; the cache gate keeps its startup decision until restart"
                    );
                }
            }

            tracing::info!("Shutdown complete");
        }
    }

    Ok(())
}
