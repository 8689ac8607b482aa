//! Favicon key service.
//!
//! Serves the favicon cache-key derivation over HTTP.
//!
//! ```text
//!     Client ──▶ listener ──▶ request id / timeout / trace layers
//!                                   │
//!                                   ▼
//!                              handlers ──▶ favicon::derive
//!                                   │         (canonicalize → hash → path)
//!                                   ▼
//!     Client ◀──────────────── JSON response
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use favicon_key::config::{load_config, ServiceConfig};
use favicon_key::observability::{logging, metrics};
use favicon_key::{FaviconServer, Shutdown};

#[derive(Parser)]
#[command(name = "favicon-key")]
#[command(about = "HTTP service deriving favicon cache paths for feed links", long_about = None)]
struct Args {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?args.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_batch_links = config.limits.max_batch_links,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Address was checked by validation when loaded from a file
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(shutdown.trigger_on_ctrl_c());

    FaviconServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
