//! HTTP server setup and the proxy handler.
//!
//! # Responsibilities
//! - Create the Axum router serving every path and method
//! - Wire up middleware (request ID, tracing)
//! - Run each request through director → transport → rewriter
//! - Serve until the shutdown signal, then drain

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ProxyConfig;
use crate::http::client::{Transport, TransportError};
use crate::http::request::prepare_outbound;
use crate::http::response::{strip_upstream_headers, ProxyError};
use crate::rewrite::rewrite_response;
use crate::routing::director;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub transport: Transport,
    pub strict_forwarding: bool,
}

/// HTTP server for the proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, TransportError> {
        let state = AppState {
            transport: Transport::new(&config.transport)?,
            strict_forwarding: config.forwarding.strict,
        };

        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(proxy_handler))
            .route("/", any(proxy_handler))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Router with all layers applied, for embedding or testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            skip_ssl_validation = self.config.transport.skip_ssl_validation,
            strict_forwarding = self.config.forwarding.strict,
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Main proxy handler.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    match forward(&state, &request_id, request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Proxy request failed");
            e.into_response()
        }
    }
}

async fn forward(
    state: &AppState,
    request_id: &str,
    mut request: Request<Body>,
) -> Result<Response, ProxyError> {
    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());

    // 1. Direct
    match director::direct(&mut request) {
        Ok(target) => {
            tracing::debug!(
                request_id = %request_id,
                method = %request.method(),
                target = %target.uri(),
                "Forwarding request"
            );
        }
        Err(e) if state.strict_forwarding => {
            tracing::warn!(request_id = %request_id, error = %e, "Rejecting unroutable request");
            return Err(e.into());
        }
        Err(e) => {
            tracing::warn!(
                request_id = %request_id,
                error = %e,
                "Unable to resolve forwarded url, forwarding unchanged"
            );
        }
    }

    // 2. Transport
    prepare_outbound(&mut request, client_ip);
    let upstream = state.transport.send(request).await?;
    let status = upstream.status();

    // 3. Rewrite
    let (parts, body) = upstream.into_parts();
    let mut response = Response::from_parts(parts, Body::new(body));
    strip_upstream_headers(&mut response);
    let response = rewrite_response(response).await?;

    tracing::debug!(request_id = %request_id, status = %status, "Upstream response returned");
    Ok(response)
}
