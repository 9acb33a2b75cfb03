//! Request direction from the forwarding header.
//!
//! # Responsibilities
//! - Read the `X-Cf-Forwarded-Url` header
//! - Parse it as an absolute URL
//! - Point the request's URI and `Host` header at that URL
//!
//! # Design Decisions
//! - Fail-open: on any error the request is left untouched and the caller
//!   decides whether to forward it anyway
//! - The body is never inspected

use axum::http::{header, uri::InvalidUri, HeaderValue, Request, Uri};
use thiserror::Error;
use url::Url;

/// Header carrying the true destination of the request.
pub const X_CF_FORWARDED_URL: &str = "x-cf-forwarded-url";

/// Errors resolving the forwarding target.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("forwarding header is missing")]
    MissingHeader,

    #[error("forwarding header is not valid text")]
    NonTextHeader,

    #[error("unable to parse forwarded url '{raw}': {source}")]
    InvalidUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },

    #[error("forwarded url '{0}' has no host")]
    MissingHost(String),

    #[error("forwarded url '{0}' has a host that is not a valid header value")]
    InvalidHost(String),

    #[error("forwarded url '{raw}' is not a valid request target: {source}")]
    InvalidTarget {
        raw: String,
        #[source]
        source: InvalidUri,
    },
}

/// Destination parsed from the forwarding header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardingTarget {
    uri: Uri,
    host: HeaderValue,
}

impl ForwardingTarget {
    /// Parse an absolute URL into a forwarding target.
    pub fn parse(raw: &str) -> Result<Self, RoutingError> {
        let mut url = Url::parse(raw).map_err(|source| RoutingError::InvalidUrl {
            raw: raw.to_string(),
            source,
        })?;

        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => return Err(RoutingError::MissingHost(raw.to_string())),
        };
        let host = HeaderValue::from_str(&host)
            .map_err(|_| RoutingError::InvalidHost(raw.to_string()))?;

        // Fragments never go on the wire.
        url.set_fragment(None);
        let uri = url
            .as_str()
            .parse::<Uri>()
            .map_err(|source| RoutingError::InvalidTarget {
                raw: raw.to_string(),
                source,
            })?;

        Ok(Self { uri, host })
    }

    /// Absolute URI the request is sent to.
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// `host[:port]` value for the `Host` header.
    pub fn host(&self) -> &HeaderValue {
        &self.host
    }
}

/// Resolve the forwarding target of `request` from its headers.
pub fn resolve<B>(request: &Request<B>) -> Result<ForwardingTarget, RoutingError> {
    let raw = request
        .headers()
        .get(X_CF_FORWARDED_URL)
        .ok_or(RoutingError::MissingHeader)?
        .to_str()
        .map_err(|_| RoutingError::NonTextHeader)?;

    ForwardingTarget::parse(raw)
}

/// Rewrite `request` so that it is sent to the URL in its forwarding header.
///
/// On error the request is not modified.
pub fn direct<B>(request: &mut Request<B>) -> Result<ForwardingTarget, RoutingError> {
    let target = resolve(request)?;

    *request.uri_mut() = target.uri().clone();
    request.headers_mut().insert(header::HOST, target.host().clone());

    Ok(target)
}
