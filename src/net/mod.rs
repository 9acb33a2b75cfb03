//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Outbound request (absolute https:// URI)
//!     → tls.rs (rustls client config, native roots or no verification)
//!     → hyper-rustls connector
//!     → upstream server
//! ```
//!
//! # Design Decisions
//! - The inbound listener is plain HTTP; TLS is only used towards upstreams
//! - Certificate validation is a process-wide toggle

pub mod tls;
