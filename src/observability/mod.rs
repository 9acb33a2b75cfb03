//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields (request_id, target, error)
//!     → tower-http TraceLayer spans per request
//!
//! Consumers:
//!     → stdout via tracing-subscriber's fmt layer
//! ```

pub mod logging;

pub use logging::init_logging;
