//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing)
//!     → routing::director (point request at X-Cf-Forwarded-Url)
//!     → request.rs (strip hop-by-hop headers, X-Forwarded-For)
//!     → client.rs (outbound HTTP/HTTPS call)
//!     → response.rs (strip hop-by-hop headers, map errors)
//!     → rewrite (inject snowflakes into <body>)
//!     → Send to client
//! ```

pub mod client;
pub mod request;
pub mod response;
pub mod server;

pub use client::{Transport, TransportError};
pub use response::ProxyError;
pub use server::HttpServer;
