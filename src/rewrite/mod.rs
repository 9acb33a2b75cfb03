//! Response rewriting subsystem.
//!
//! # Data Flow
//! ```text
//! Upstream response (headers + body stream)
//!     → buffer the full body
//!     → html.rs (parse, append fragment.rs to <body>, serialize)
//!     → Injected: replace body, fix Content-Length if present
//!     → Passthrough: original body and headers, byte-for-byte
//! ```
//!
//! # Design Decisions
//! - Best effort: a document that cannot be parsed is passed through
//! - Only an unreadable body or a failed serialization is an error
//! - Content-Length is rewritten only when the upstream sent one

pub mod fragment;
pub mod html;

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Response},
};
use thiserror::Error;

pub use fragment::SNOWFLAKES;
pub use html::{inject, Rewritten};

/// Errors that abort a rewrite.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// The upstream body could not be fully read.
    #[error("unable to read body of response: {0}")]
    Read(#[source] axum::Error),

    /// The modified document could not be produced.
    #[error("unable to get HTML of modified document: {0}")]
    Serialize(String),
}

/// Buffer `response`, decorate it when it is an HTML document, and return it.
pub async fn rewrite_response(response: Response<Body>) -> Result<Response<Body>, RewriteError> {
    let (mut parts, body) = response.into_parts();

    let original = axum::body::to_bytes(body, usize::MAX).await.map_err(|e| {
        tracing::error!(error = %e, "Unable to read body of response");
        RewriteError::Read(e)
    })?;

    let rewritten = inject(&original, SNOWFLAKES)?;
    let injected = rewritten.is_injected();
    let bytes = rewritten.into_bytes();
    if injected {
        update_content_length(&mut parts.headers, bytes.len());
        tracing::debug!(
            original_bytes = original.len(),
            rewritten_bytes = bytes.len(),
            "Injected snowflakes"
        );
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

/// Set `Content-Length` to `len`, but only if the header is already present.
pub fn update_content_length(headers: &mut HeaderMap, len: usize) {
    if headers.contains_key(header::CONTENT_LENGTH) {
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from(len));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    async fn body_of(response: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn html_with_content_length_is_updated() {
        let upstream = Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_LENGTH, "29")
            .body(Body::from("<html><body>Hi</body></html>"))
            .unwrap();

        let response = rewrite_response(upstream).await.unwrap();
        let length: usize = response.headers()[header::CONTENT_LENGTH]
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        let body = body_of(response).await;

        assert_eq!(body, format!("<html><body>Hi{SNOWFLAKES}</body></html>"));
        assert_eq!(length, body.len());
    }

    #[tokio::test]
    async fn html_without_content_length_stays_without() {
        let upstream = Response::builder()
            .header(header::CONTENT_TYPE, "text/html")
            .body(Body::from("<body></body>"))
            .unwrap();

        let response = rewrite_response(upstream).await.unwrap();

        assert!(!response.headers().contains_key(header::CONTENT_LENGTH));
        assert_eq!(body_of(response).await, format!("<body>{SNOWFLAKES}</body>"));
    }

    #[tokio::test]
    async fn json_passthrough_keeps_headers_and_body() {
        let upstream = Response::builder()
            .status(StatusCode::CREATED)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CONTENT_LENGTH, "15")
            .body(Body::from(r#"{"json":"body"}"#))
            .unwrap();

        let response = rewrite_response(upstream).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::CONTENT_LENGTH], "15");
        assert_eq!(body_of(response).await, r#"{"json":"body"}"#);
    }

    #[test]
    fn content_length_only_replaced_when_present() {
        let mut headers = HeaderMap::new();
        update_content_length(&mut headers, 42);
        assert!(headers.is_empty());

        headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("3"));
        update_content_length(&mut headers, 42);
        assert_eq!(headers[header::CONTENT_LENGTH], "42");
    }
}
