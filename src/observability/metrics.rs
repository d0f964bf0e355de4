//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_hops_received_total` (counter): `/ping` requests accepted
//! - `relay_forwards_total` (counter): by `outcome` (forwarded, chain_end)
//! - `relay_origin_callbacks_total` (counter): by `outcome` (delivered, failed)
//! - `relay_chains_completed_total` (counter): `/finish` calls on ordinal 0
//! - `shutdown_triggers_total` (counter): by `cause`, for either server

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

use crate::lifecycle::ShutdownCause;

/// Install the Prometheus exporter on `addr`. Must run inside the runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_hop_received() {
    metrics::counter!("relay_hops_received_total").increment(1);
}

pub fn record_forward(outcome: &'static str) {
    metrics::counter!("relay_forwards_total", "outcome" => outcome).increment(1);
}

pub fn record_origin_callback(outcome: &'static str) {
    metrics::counter!("relay_origin_callbacks_total", "outcome" => outcome).increment(1);
}

pub fn record_chain_completed() {
    metrics::counter!("relay_chains_completed_total").increment(1);
}

pub fn record_shutdown_trigger(cause: ShutdownCause) {
    metrics::counter!("shutdown_triggers_total", "cause" => cause.to_string()).increment(1);
}
