//! Travel Listings API server
//!
//! Headless REST server suitable for deployment as a systemd service,
//! a container, or a standalone process.
//!
//! ```sh
//! # Run with default config (~/.config/travel-listings/config.toml)
//! travel-listings
//!
//! # Custom config path
//! travel-listings --config /etc/travel-listings/config.toml
//!
//! # Override port and log level
//! travel-listings --api-port 9090 --log-level debug
//!
//! # Validate config without starting
//! travel-listings --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use travel_listings::config::AppConfig;
use travel_listings::server::{init_tracing, ServerHandle, ServerOptions};

/// Travel Listings: listings, bookings and reviews over REST.
#[derive(Parser, Debug)]
#[command(
    name = "travel-listings",
    version,
    about = "REST API for travel listings, bookings and reviews",
    long_about = "Travel Listings REST API server with Swagger UI.\n\n\
                  Default config: ~/.config/travel-listings/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "TRAVEL_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    api_port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(travel_listings::default_config_path);

    let loaded = AppConfig::load(&config_path);
    let mut config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => AppConfig::default(),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.api_port {
        config.server.api_port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        if let Err(e) = loaded {
            eprintln!("Configuration is invalid: {}", e);
            std::process::exit(1);
        }
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.api_address());
        println!("   Database    : {}", config.database.connection_url());
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        return Ok(());
    }

    init_tracing(&config);
    match loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }
    if let Some(port) = cli.api_port {
        info!("CLI override: api_port = {}", port);
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
