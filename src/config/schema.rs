//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files, and
//! every field falls back to its default when absent.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for a relay node.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Per-hop behaviour.
    pub relay: RelayTimingConfig,

    /// How peers are addressed and called.
    pub peers: PeerConfig,

    /// Graceful shutdown settings.
    pub shutdown: ShutdownConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Root configuration for the control server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Listener configuration. Defaults to port 80.
    pub listener: ControlListenerConfig,

    /// Graceful shutdown settings.
    pub shutdown: ShutdownConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            listener: ControlListenerConfig::default(),
            shutdown: ShutdownConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Control server listener. Same shape as [`ListenerConfig`], port 80.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ControlListenerConfig {
    /// Bind address (e.g., "0.0.0.0:80").
    pub bind_address: String,
}

impl Default for ControlListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:80".to_string(),
        }
    }
}

/// Per-hop relay behaviour.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RelayTimingConfig {
    /// Artificial delay before a hop is processed, in milliseconds.
    pub hop_delay_ms: u64,

    /// Upper bound on the size of an incoming message body. `0` means
    /// unbounded.
    pub max_message_bytes: usize,
}

impl Default for RelayTimingConfig {
    fn default() -> Self {
        Self {
            hop_delay_ms: 2_000,
            max_message_bytes: 0,
        }
    }
}

impl RelayTimingConfig {
    pub fn hop_delay(&self) -> Duration {
        Duration::from_millis(self.hop_delay_ms)
    }
}

/// Peer addressing and outbound call settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PeerConfig {
    /// Port every peer listens on.
    pub port: u16,

    /// DNS suffix appended after `<service>.<namespace>`.
    pub cluster_domain: String,

    /// Timeout for each outbound relay or callback call.
    pub request_timeout_secs: u64,
}

impl Default for PeerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            cluster_domain: "svc.cluster.local".to_string(),
            request_timeout_secs: 5,
        }
    }
}

impl PeerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Graceful shutdown settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShutdownConfig {
    /// How long in-flight requests may run after shutdown begins.
    pub grace_period_secs: u64,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            grace_period_secs: 5,
        }
    }
}

impl ShutdownConfig {
    pub fn grace_period(&self) -> Duration {
        Duration::from_secs(self.grace_period_secs)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
