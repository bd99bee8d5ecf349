//! bookmx reservation service
//!
//! ```sh
//! # default config (~/.config/bookmx/config.toml)
//! bookmx-service
//!
//! bookmx-service --config /etc/bookmx/config.toml --api-port 9090
//!
//! # validate the config and exit
//! bookmx-service --check
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};

use bookmx::config::{AppConfig, ConfigError, CONFIG_ENV};
use bookmx::server::{init_tracing, ServerHandle, ServerOptions};

#[derive(Parser, Debug)]
#[command(
    name = "bookmx-service",
    version,
    about = "Hotel catalog and reservation REST API",
    long_about = "bookmx: REST API for creating and listing hotel reservations.\n\n\
                  Default config: ~/.config/bookmx/config.toml"
)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Override `server.api_port`
    #[arg(long)]
    api_port: Option<u16>,

    /// Override `logging.level` (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration and exit
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup
    #[arg(long)]
    no_migrate: bool,

    /// Skip seeding cities, roads and hotels
    #[arg(long)]
    no_seed: bool,
}

/// A missing file means defaults; anything else is an error.
fn load_config(path: &Path) -> Result<(AppConfig, bool), ConfigError> {
    match AppConfig::load(path) {
        Ok(cfg) => Ok((cfg, true)),
        Err(ConfigError::Io { ref source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            Ok((AppConfig::default(), false))
        }
        Err(e) => Err(e),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(bookmx::default_config_path);

    let (mut config, from_file) = match load_config(&config_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Invalid configuration {}: {}", config_path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(port) = cli.api_port {
        config.server.api_port = port;
    }
    if let Some(level) = cli.log_level.clone() {
        config.logging.level = level;
    }

    init_tracing(&config);
    if from_file {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!(
            "No config at {}, using defaults",
            config_path.display()
        );
    }

    if cli.check {
        if let Err(e) = config.validate() {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.api_address());
        println!("   Storage     : {:?}", config.storage.backend);
        println!("   Database    : {}", config.database.connection_url());
        println!("   Log level   : {}", config.logging.level);
        println!(
            "   Seed data   : {} cities, {} roads, {} hotels",
            config.catalog.cities.len(),
            config.catalog.roads.len(),
            config.catalog.hotels.len()
        );
        return ExitCode::SUCCESS;
    }

    let mut opts = ServerOptions::new(config);
    opts.auto_migrate = !cli.no_migrate;
    opts.seed_catalog = opts.seed_catalog && !cli.no_seed;

    let handle = match ServerHandle::start(opts).await {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to start: {}", e);
            return ExitCode::FAILURE;
        }
    };

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down");
    handle.wait().await;

    ExitCode::SUCCESS
}
