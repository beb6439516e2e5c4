//! Boxing studio account API server
//!
//! ```sh
//! # Run with default config (~/.config/boxing-studio/config.toml)
//! boxing-studio
//!
//! # Custom config path and port
//! boxing-studio --config /etc/boxing-studio/config.toml --port 8080
//!
//! # Validate config without starting
//! boxing-studio --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use boxing_studio::config::{AppConfig, StorageBackend};
use boxing_studio::server::{init_tracing, ServerHandle, ServerOptions};

/// Registration and login API for the boxing studio web app.
#[derive(Parser, Debug)]
#[command(name = "boxing-studio", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "BOXING_STUDIO_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

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
        .unwrap_or_else(boxing_studio::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Log level override must land before tracing is initialized.
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config);

    match &load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            if !cli.check {
                error!("Using default configuration.");
            }
        }
    }

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        if let Some(e) = load_error {
            return Err(e.into());
        }
        let database = match config.database.backend {
            StorageBackend::Sqlite => config.database.connection_url(),
            StorageBackend::Memory => "in-memory".to_string(),
        };
        info!(
            config_file = %config_path.display(),
            address = %config.listen_address(),
            database = %database,
            log_level = %config.logging.level,
            "Configuration is valid"
        );
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = match ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await
    {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to start server: {}", e);
            return Err(e);
        }
    };

    handle.install_signal_handler();
    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
