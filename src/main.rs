//! Wayfare - Travel Guide Service
//!
//! Wayfare is a thin proxy in front of a generative-language API. It
//! serves curated attraction lists and long-form spoken-style guides for
//! a location, enriches results with images from public sources, and
//! caches every generated response in PostgreSQL.

use clap::{Parser, Subcommand};
use tracing::info;
use wayfare_core::{AppConfig, Result, WayfareError};

#[derive(Parser)]
#[command(name = "wayfare")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Wayfare travel guide service - AI-generated attraction lists with response caching")]
#[command(long_about = r#"
Wayfare serves AI-generated travel guides over a small JSON API:

  POST /api/search  - top attractions for a city, with images
  POST /api/details - a long spoken-style guide for one place
  GET  /api/ping    - database health check

Responses are cached in PostgreSQL per location and prompt version, so a
location is only ever generated once until a prompt version is bumped.
"#)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Wayfare HTTP server
    Serve {
        /// Server host address
        #[arg(long)]
        host: Option<String>,

        /// Server port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check database connectivity
    Health,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger_config = wayfare_infra::logger::logger_config_from_env();
    if cli.verbose {
        logger_config.level = "debug".to_string();
    }
    wayfare_infra::init_logger(logger_config)?;

    info!("Starting Wayfare v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(Commands::Serve { host, port }) => handle_serve(host, port).await?,
        Some(Commands::Health) => handle_health().await?,
        Some(Commands::Version) => {
            println!("wayfare v{}", env!("CARGO_PKG_VERSION"));
        }
        None => handle_serve(None, None).await?,
    }

    Ok(())
}

async fn handle_serve(host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = AppConfig::from_env();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config.validate()?;

    info!("Serving on {}:{}", config.host, config.port);

    let server_config = wayfare_serve::ServerConfig::from_app_config(config);
    let server = wayfare_serve::WayfareServer::new(server_config).await?;
    server.start().await
}

async fn handle_health() -> Result<()> {
    let config = AppConfig::from_env();
    if config.database_url.trim().is_empty() {
        return Err(WayfareError::config("DATABASE_URL is not set"));
    }

    let store = wayfare_serve::PlaceStore::connect(&config.database_url).await?;
    let time = store.ping().await?;

    println!("Database reachable, server time: {}", time);
    Ok(())
}
