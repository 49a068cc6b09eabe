//! Talos bootstrap webhook server
//!
//! Runs the validating admission webhook for TalosConfigTemplate
//! resources. The bootstrap reconciler that generates machine
//! configuration is deployed separately.

use std::env;
use talos_bootstrap_controller::error::ControllerError;
use talos_bootstrap_controller::server;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), ControllerError> {
    tracing_subscriber::fmt::init();

    info!("Starting Talos bootstrap webhook");

    // Load configuration from environment variables
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8443".to_string());

    info!("Configuration:");
    info!("  Bind address: {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ControllerError::InvalidConfig(format!("cannot bind {bind_addr}: {e}")))?;

    info!("Webhook listening on {}", bind_addr);

    axum::serve(listener, server::router())
        .await
        .map_err(|e| ControllerError::Serve(e.to_string()))?;

    Ok(())
}
