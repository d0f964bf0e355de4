//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: config → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::{
    ControlConfig, ObservabilityConfig, RelayConfig, ShutdownConfig,
};

/// A single semantic problem with a config value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub fn validate_relay(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_listener(&config.listener.bind_address, &mut errors);
    check_shutdown(&config.shutdown, &mut errors);
    check_observability(&config.observability, &mut errors);

    if config.peers.port == 0 {
        errors.push(ValidationError::new("peers.port", "must be greater than 0"));
    }
    if config.peers.request_timeout_secs == 0 {
        errors.push(ValidationError::new("peers.request_timeout_secs", "must be greater than 0"));
    }

    let domain = &config.peers.cluster_domain;
    if domain.is_empty() {
        errors.push(ValidationError::new("peers.cluster_domain", "must not be empty"));
    } else if domain.starts_with('.') || domain.ends_with('.') {
        errors.push(ValidationError::new(
            "peers.cluster_domain",
            format!("'{}' must not start or end with '.'", domain),
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

pub fn validate_control(config: &ControlConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_listener(&config.listener.bind_address, &mut errors);
    check_shutdown(&config.shutdown, &mut errors);
    check_observability(&config.observability, &mut errors);

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_listener(bind_address: &str, errors: &mut Vec<ValidationError>) {
    if bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", bind_address),
        ));
    }
}

fn check_shutdown(shutdown: &ShutdownConfig, errors: &mut Vec<ValidationError>) {
    if shutdown.grace_period_secs == 0 {
        errors.push(ValidationError::new("shutdown.grace_period_secs", "must be greater than 0"));
    }
}

fn check_observability(observability: &ObservabilityConfig, errors: &mut Vec<ValidationError>) {
    // Only checked when the exporter will actually bind.
    if observability.metrics_enabled && observability.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", observability.metrics_address),
        ));
    }
}
