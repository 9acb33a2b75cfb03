//! Snowflake route service.
//!
//! A transparent reverse proxy that sends each request to the URL named in
//! its `X-Cf-Forwarded-Url` header and decorates HTML responses with a fixed
//! snowflakes fragment appended to `<body>`.
//!
//! ```text
//!   client ──▶ http::server ──▶ routing::director ──▶ http::client ──▶ upstream
//!                                                           │
//!   client ◀───────────────── rewrite (inject <body>) ◀─────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod net;
pub mod rewrite;
pub mod routing;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
