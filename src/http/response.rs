//! Response handling and error mapping.
//!
//! # Responsibilities
//! - Strip hop-by-hop headers from the upstream response
//! - Map proxy failures to HTTP status codes
//!
//! # Design Decisions
//! - Transport failures become 502, timeouts 504
//! - Rewrite failures (unreadable body, failed serialization) become 500
//! - Error bodies are short plain text; details go to the log

use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
};
use thiserror::Error;

use crate::http::client::TransportError;
use crate::http::request::remove_hop_by_hop_headers;
use crate::rewrite::RewriteError;
use crate::routing::RoutingError;

/// Failure while serving a proxied request.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Forwarding header rejected (strict forwarding only).
    #[error(transparent)]
    Routing(#[from] RoutingError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Rewrite(#[from] RewriteError),
}

impl ProxyError {
    /// Status code reported to the client.
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Routing(_) => StatusCode::BAD_REQUEST,
            ProxyError::Transport(TransportError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            ProxyError::Transport(_) => StatusCode::BAD_GATEWAY,
            ProxyError::Rewrite(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match self {
            ProxyError::Routing(_) => "Missing or invalid forwarding URL",
            ProxyError::Transport(TransportError::Timeout(_)) => "Upstream request timed out",
            ProxyError::Transport(_) => "Upstream request failed",
            ProxyError::Rewrite(_) => "Unable to process upstream response",
        };
        (status, message).into_response()
    }
}

/// Drop connection-scoped headers from an upstream response.
pub fn strip_upstream_headers(response: &mut Response<Body>) {
    remove_hop_by_hop_headers(response.headers_mut());
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use std::time::Duration;

    #[test]
    fn status_mapping() {
        let routing = ProxyError::from(RoutingError::MissingHeader);
        assert_eq!(routing.status(), StatusCode::BAD_REQUEST);

        let timeout = ProxyError::from(TransportError::Timeout(Duration::from_secs(3)));
        assert_eq!(timeout.status(), StatusCode::GATEWAY_TIMEOUT);

        let rewrite = ProxyError::from(RewriteError::Serialize("boom".into()));
        assert_eq!(rewrite.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn upstream_hop_headers_are_removed() {
        let mut response = Response::builder()
            .header(header::TRANSFER_ENCODING, "chunked")
            .header(header::CONNECTION, "close")
            .header(header::CONTENT_TYPE, "text/html")
            .body(Body::empty())
            .unwrap();

        strip_upstream_headers(&mut response);

        assert!(!response.headers().contains_key(header::TRANSFER_ENCODING));
        assert!(!response.headers().contains_key(header::CONNECTION));
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
    }
}
