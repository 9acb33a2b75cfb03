//! Request preparation for forwarding.
//!
//! # Responsibilities
//! - Strip hop-by-hop headers before the request leaves the proxy
//! - Record the client address in `X-Forwarded-For`
//!
//! # Design Decisions
//! - Headers named in `Connection` are treated as hop-by-hop too
//! - An existing `X-Forwarded-For` chain is extended, never replaced

use std::net::IpAddr;

use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Request};

/// Request header carrying the chain of client addresses.
pub const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

/// Headers that apply to a single connection and must not be forwarded.
const HOP_BY_HOP: [&str; 9] = [
    "connection",
    "keep-alive",
    "proxy-connection",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Remove hop-by-hop headers, including any listed in `Connection`.
pub fn remove_hop_by_hop_headers(headers: &mut HeaderMap) {
    let listed: Vec<HeaderName> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|name| HeaderName::from_bytes(name.trim().as_bytes()).ok())
        .collect();

    for name in listed {
        headers.remove(name);
    }
    for name in HOP_BY_HOP {
        headers.remove(name);
    }
}

/// Append `client` to the request's `X-Forwarded-For` chain.
pub fn append_forwarded_for(headers: &mut HeaderMap, client: IpAddr) {
    let chain = match headers.get(&X_FORWARDED_FOR).and_then(|v| v.to_str().ok()) {
        Some(prior) if !prior.trim().is_empty() => format!("{prior}, {client}"),
        _ => client.to_string(),
    };
    if let Ok(value) = HeaderValue::from_str(&chain) {
        headers.insert(X_FORWARDED_FOR, value);
    }
}

/// Prepare a directed request for the transport.
pub fn prepare_outbound<B>(request: &mut Request<B>, client: Option<IpAddr>) {
    let headers = request.headers_mut();
    remove_hop_by_hop_headers(headers);
    if let Some(ip) = client {
        append_forwarded_for(headers, ip);
    }
}
