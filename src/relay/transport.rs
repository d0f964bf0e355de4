//! Outbound calls to peers.

use async_trait::async_trait;
use std::time::Duration;

use crate::http::X_REQUEST_ID;
use crate::relay::error::RelayError;

/// Delivers a text message to a peer endpoint.
///
/// `Ok` only for a 2xx answer; every other outcome is an error the relay
/// treats as the end of the chain.
#[async_trait]
pub trait PeerTransport: Send + Sync {
    async fn post(&self, url: &str, message: &str, request_id: &str) -> Result<(), RelayError>;
}

/// `reqwest`-backed transport with a per-call timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, timeout))
    }

    /// Use a pre-built client, e.g. one with DNS overrides.
    pub fn with_client(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl PeerTransport for HttpTransport {
    async fn post(&self, url: &str, message: &str, request_id: &str) -> Result<(), RelayError> {
        tracing::info!(url = %url, request_id = %request_id, "Making POST request");

        let response = self
            .client
            .post(url)
            .timeout(self.timeout)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .header(X_REQUEST_ID, request_id)
            .body(message.to_string())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RelayError::Timeout {
                        url: url.to_string(),
                        timeout: self.timeout,
                    }
                } else {
                    RelayError::Unreachable {
                        url: url.to_string(),
                        reason: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        tracing::debug!(url = %url, status = %status, "Peer accepted message");
        Ok(())
    }
}
