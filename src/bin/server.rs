//! Learnboard Server Binary
//!
//! Starts the HTTP API for Learnboard.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use learnboard::config::ConfigBuilder;
use learnboard::network::Server;
use learnboard::{Config, Engine};
use tracing_subscriber::{fmt, EnvFilter};

/// Learnboard Server
#[derive(Parser, Debug)]
#[command(name = "learnboard-server")]
#[command(about = "Learning dashboard REST API over an in-memory store")]
#[command(version)]
struct Args {
    /// Optional TOML config file
    #[arg(short, long, env = "LEARNBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address (host:port)
    #[arg(short, long, env = "LEARNBOARD_LISTEN")]
    listen: Option<String>,

    /// User id every request acts as
    #[arg(short, long, env = "LEARNBOARD_USER_ID")]
    user_id: Option<u32>,

    /// Start with an empty store instead of the demo fixtures
    #[arg(long)]
    no_seed: bool,
}

impl Args {
    /// Defaults, then the config file, then flags
    fn into_config(self) -> learnboard::Result<Config> {
        let base = match &self.config {
            Some(path) => Config::from_toml_file(path)?,
            None => Config::default(),
        };

        let mut builder = ConfigBuilder::from_config(base);
        if let Some(listen) = self.listen {
            builder = builder.listen_addr(listen);
        }
        if let Some(user_id) = self.user_id {
            builder = builder.user_id(user_id);
        }
        if self.no_seed {
            builder = builder.seed(false);
        }
        Ok(builder.build())
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,learnboard=debug,tower_http=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Learnboard Server v{}", learnboard::VERSION);

    let config = match args.into_config() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Listen address: {}", config.listen_addr);
    tracing::info!("Acting as user: {}", config.user_id);

    let engine = match Engine::open(&config) {
        Ok(e) => Arc::new(e),
        Err(e) => {
            tracing::error!("Failed to open engine: {}", e);
            std::process::exit(1);
        }
    };

    let server = Server::new(config, engine);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
