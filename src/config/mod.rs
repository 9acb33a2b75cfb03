//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (PORT, SKIP_SSL_VALIDATION, ...)
//!     → loader.rs (read & parse)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → passed by value/reference to server and transport
//! ```
//!
//! # Design Decisions
//! - Read once at startup, never mutated afterwards
//! - All optional settings have defaults; only the port is required
//! - Certificate validation defaults to off; it must be enabled explicitly

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_from_env, ConfigError};
pub use schema::{ForwardingConfig, ListenerConfig, ObservabilityConfig, ProxyConfig, TransportConfig};
