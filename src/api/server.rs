//! HTTP server bootstrap.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ApiServerConfig;
use crate::errors::Error;

use super::routes::{build_router, ApiState};

/// Bind and serve the API until ctrl-c.
pub async fn start_api_server(config: ApiServerConfig, state: ApiState) -> crate::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port)
        .parse()
        .map_err(|err| Error::config(format!("Invalid API address: {}", err)))?;

    let router = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| Error::transport(format!("Failed to bind API server: {}", err)))?;

    info!(address = %addr, "Starting HTTP API server");
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!(error = %err, "API server shutdown listener failed");
            }
        })
        .await
        .map_err(|err| Error::transport(format!("API server error: {}", err)))?;

    info!("API server shutdown completed");
    Ok(())
}
