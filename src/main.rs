//! Snowflake route service entry point.
//!
//! Configuration comes from the environment:
//! - `PORT` (required): listening port on all interfaces
//! - `SKIP_SSL_VALIDATION`: disable upstream certificate checks (default `true`)
//! - `STRICT_FORWARDING`: reject requests without a usable forwarding URL
//! - `REQUEST_TIMEOUT_SECS`: optional upstream timeout
//! - `LOG_LEVEL`: log filter when `RUST_LOG` is unset

use tokio::net::TcpListener;

use snowflake_proxy::config::load_from_env;
use snowflake_proxy::lifecycle::{signals, Shutdown};
use snowflake_proxy::observability::init_logging;
use snowflake_proxy::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_from_env()?;
    init_logging(&config.observability);

    tracing::info!("snowflake-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        port = config.listener.port,
        skip_ssl_validation = config.transport.skip_ssl_validation,
        request_timeout_secs = ?config.transport.request_timeout_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
