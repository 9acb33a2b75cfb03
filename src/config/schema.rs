//! Configuration schema definitions.
//!
//! The proxy is configured once at startup from the environment. The resulting
//! [`ProxyConfig`] is immutable and is passed explicitly to the subsystems that
//! need it.

use std::time::Duration;

/// Root configuration for the proxy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Outbound transport settings.
    pub transport: TransportConfig,

    /// Forwarding header handling.
    pub forwarding: ForwardingConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerConfig {
    /// Port bound on all interfaces.
    pub port: u16,
}

impl ListenerConfig {
    /// Bind address for the listener (all interfaces).
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Outbound transport configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Accept any upstream certificate (no chain or hostname verification).
    pub skip_ssl_validation: bool,

    /// Upper bound on a single upstream call. `None` waits indefinitely.
    pub request_timeout_secs: Option<u64>,
}

impl TransportConfig {
    /// Upstream timeout as a [`Duration`], if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            // Insecure unless explicitly turned off.
            skip_ssl_validation: true,
            request_timeout_secs: None,
        }
    }
}

/// Forwarding header configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardingConfig {
    /// Reject requests whose forwarding header is missing or invalid with
    /// `400 Bad Request` instead of forwarding them unresolved.
    pub strict: bool,
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Fallback filter directive used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
