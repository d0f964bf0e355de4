//! Relay error definitions.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use std::time::Duration;
use thiserror::Error;

/// Errors raised while handling or relaying a message.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The inbound body could not be read (or exceeded the size bound).
    #[error("Could not read request body: {0}")]
    BodyRead(String),

    /// Anything but POST on a relay endpoint.
    #[error("Only POST method is accepted")]
    MethodNotAllowed,

    /// Connection-level failure talking to a peer.
    #[error("Request to {url} failed: {reason}")]
    Unreachable { url: String, reason: String },

    /// Peer did not answer within the outbound timeout.
    #[error("Request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    /// Peer answered with a non-2xx status.
    #[error("Request to {url} returned non-2xx status: {status}")]
    Status { url: String, status: u16 },
}

impl RelayError {
    /// Downstream failures end the chain instead of failing the caller.
    pub fn is_downstream(&self) -> bool {
        matches!(
            self,
            RelayError::Unreachable { .. } | RelayError::Timeout { .. } | RelayError::Status { .. }
        )
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::BodyRead(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::Unreachable { .. } | RelayError::Status { .. } => StatusCode::BAD_GATEWAY,
            RelayError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = format!("{}\n", self);
        match self {
            RelayError::MethodNotAllowed => (status, [(header::ALLOW, "POST")], body).into_response(),
            _ => (status, body).into_response(),
        }
    }
}
