//! Router service.
//!
//! Serves the routes declared in a TOML file over HTTP.
//!
//! ```text
//!     Client Request
//!     ──────▶ axum listener ──▶ http::request (strip mount) ──▶ routing::Router::run
//!                                                                   │
//!     Client Response                                               ▼
//!     ◀────── http::response ◀──── handler / gate / not-found ◀─────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use path_router::config::loader::load_config;
use path_router::config::watcher::ConfigWatcher;
use path_router::config::RouterConfig;
use path_router::lifecycle::{build_router, Shutdown};
use path_router::observability::{logging, metrics};
use path_router::HttpServer;

#[derive(Parser)]
#[command(name = "path-router")]
#[command(about = "Serve TOML-declared routes over HTTP", long_about = None)]
struct Args {
    /// Route configuration file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reload routes when the configuration file changes.
    #[arg(long)]
    watch: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);
    tracing::info!("path-router v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        routes = config.routes.len(),
        base_path = %config.mount.base_path,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(&config, build_router(&config));
    let handle = server.handle();

    // Keeps the notify watcher alive for the lifetime of the server.
    let _watcher = match (&args.config, args.watch) {
        (Some(path), true) => {
            let (watcher, mut updates) = ConfigWatcher::new(path).spawn()?;
            tokio::spawn(async move {
                while let Some(new_config) = updates.recv().await {
                    handle.replace(build_router(&new_config));
                }
            });
            Some(watcher)
        }
        (None, true) => {
            tracing::warn!("--watch ignored without --config");
            None
        }
        _ => None,
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let _signals = shutdown.trigger_on_signal();

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
