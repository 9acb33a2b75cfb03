//! Outbound HTTP(S) transport.
//!
//! # Responsibilities
//! - Execute the directed request against its absolute URI
//! - Speak TLS to `https://` upstreams using the configured verification mode
//! - Optionally bound each call with a timeout
//!
//! # Design Decisions
//! - One pooled hyper client per process, cloned into every handler
//! - No retries and no redirect following
//! - No timeout unless one is configured

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use hyper::body::Incoming;
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use thiserror::Error;

use crate::config::TransportConfig;
use crate::net::tls;

/// Errors produced by the transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// TLS client configuration could not be built.
    #[error("TLS setup failed: {0}")]
    Tls(#[from] rustls::Error),

    /// The upstream call failed (DNS, connect, TLS handshake, protocol).
    #[error("upstream request failed: {0}")]
    Upstream(#[from] hyper_util::client::legacy::Error),

    /// No response within the configured timeout.
    #[error("upstream did not respond within {0:?}")]
    Timeout(Duration),
}

/// HTTP(S) client used to reach forwarded destinations.
#[derive(Clone)]
pub struct Transport {
    client: Client<HttpsConnector<HttpConnector>, Body>,
    timeout: Option<Duration>,
}

impl Transport {
    /// Create a transport from the transport configuration.
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let tls_config = tls::client_config(config.skip_ssl_validation)?;

        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_tls_config(tls_config)
            .https_or_http()
            .enable_http1()
            .enable_http2()
            .build();

        let client = Client::builder(TokioExecutor::new()).build(connector);

        Ok(Self {
            client,
            timeout: config.request_timeout(),
        })
    }

    /// Send `request` upstream and return the raw response.
    pub async fn send(&self, request: Request<Body>) -> Result<Response<Incoming>, TransportError> {
        let call = self.client.request(request);
        let response = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| TransportError::Timeout(limit))??,
            None => call.await?,
        };
        Ok(response)
    }
}
