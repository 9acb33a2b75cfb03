//! Request routing subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → director.rs (read X-Cf-Forwarded-Url, parse absolute URL)
//!     → request URI + Host rewritten to the forwarded destination
//!     → handed to the transport
//! ```
//!
//! # Design Decisions
//! - Single destination per request, taken from the request itself
//! - Unresolvable targets fail open unless strict forwarding is enabled

pub mod director;

pub use director::{direct, ForwardingTarget, RoutingError, X_CF_FORWARDED_URL};
