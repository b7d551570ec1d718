//! minircd - a small line-oriented chat server.
//!
//! Accepts TCP clients, registers them with NICK and USER, and relays
//! messages between users and `#channels`.

mod config;
mod error;
mod handlers;
mod http;
mod metrics;
mod network;
mod state;
mod telemetry;

use crate::config::{Cli, Config};
use crate::handlers::Registry;
use crate::network::Gateway;
use crate::state::Matrix;
use anyhow::Context as _;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_cli(&cli)
        .inspect_err(|e| error!(error = %e, "Invalid configuration"))
        .context("loading configuration")?;

    info!(
        server = %config.server.name,
        address = %config.listen.address(),
        "Starting minircd"
    );

    let matrix = Arc::new(Matrix::new(&config));
    let registry = Arc::new(Registry::new());
    info!(commands = ?registry.commands(), "Command handlers registered");

    let metrics_port = config.server.metrics_port;
    if metrics_port != 0 {
        metrics::init();
        info!("Metrics initialized");

        tokio::spawn(async move {
            http::run_http_server(metrics_port).await;
        });
        info!(port = metrics_port, "Prometheus HTTP server started");
    }

    let gateway = Gateway::bind(
        config.listen.address(),
        Arc::clone(&matrix),
        registry,
        config.limits.clone(),
    )
    .await
    .with_context(|| format!("binding {}", config.listen.address()))?;

    info!(address = %gateway.local_addr()?, "Server ready");

    tokio::select! {
        res = gateway.run() => res?,
        res = tokio::signal::ctrl_c() => {
            res.context("waiting for ctrl-c")?;
            info!(
                clients = matrix.clients.len(),
                channels = matrix.channels.len(),
                "Shutting down"
            );
        }
    }

    Ok(())
}
