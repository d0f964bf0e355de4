//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! relay / control / lifecycle
//!     → logging.rs (structured tracing events to stdout)
//!     → metrics.rs (counters, optional Prometheus endpoint)
//! ```
//!
//! # Design Decisions
//! - Log level comes from RUST_LOG, with a per-crate default
//! - Metrics are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
