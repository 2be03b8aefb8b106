//! showmock: multi-tenant HTTP mock responder.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client Request
//!   ──────────────▶ http::server ──▶ routing (host → Domain) ──▶ mock::Domain
//!                                                                  │
//!                                          path normalize ◀────────┤
//!                                          content negotiate ◀─────┤
//!                                          <data>/<domain>/<METHOD>/<path>
//!                                                                  │
//!   Client Response ◀── http::response ◀── ResponseDescriptor ◀────┘
//! ```

use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use showmock::config::Args;
use showmock::observability::{logging, metrics};
use showmock::{build_registry, HttpServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config_path = args.config_path().map(|p| p.display().to_string());
    let config = args.into_config()?;

    logging::init(&config.observability.log_level)?;

    tracing::info!("showmock v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = config_path.as_deref().unwrap_or("-"),
        bind_address = %config.listener.bind_address,
        data_dir = %config.mock.data_dir.display(),
        default_host = %config.mock.default_host,
        default_content_type = %config.mock.default_content_type,
        accepted = ?config.mock.accepted_media_types,
        "Configuration loaded"
    );

    let registry = Arc::new(build_registry(&config)?);

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(&config, registry);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
