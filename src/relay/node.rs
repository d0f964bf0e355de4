//! Chain relay logic for a single node.

use std::sync::Arc;
use std::time::Duration;

use crate::observability::metrics;
use crate::relay::error::RelayError;
use crate::relay::identity::NodeIdentity;
use crate::relay::message::next_message;
use crate::relay::peer::{Endpoint, PeerDirectory};
use crate::relay::transport::PeerTransport;

/// What happened to a message after this node processed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The next peer accepted the message.
    Forwarded { to: u32, message: String },
    /// No next peer answered; ordinal zero was told the final message.
    ChainEnded { message: String, origin_notified: bool },
}

/// Immutable per-process relay state shared by every request.
pub struct RelayNode {
    identity: NodeIdentity,
    peers: PeerDirectory,
    transport: Arc<dyn PeerTransport>,
    hop_delay: Duration,
    max_message_bytes: usize,
}

impl RelayNode {
    pub fn new(
        identity: NodeIdentity,
        peers: PeerDirectory,
        transport: Arc<dyn PeerTransport>,
        hop_delay: Duration,
        max_message_bytes: usize,
    ) -> Self {
        Self {
            identity,
            peers,
            transport,
            hop_delay,
            max_message_bytes,
        }
    }

    pub fn identity(&self) -> &NodeIdentity {
        &self.identity
    }

    pub fn hop_delay(&self) -> Duration {
        self.hop_delay
    }

    /// Byte limit for inbound bodies; `usize::MAX` when unbounded.
    pub fn body_limit(&self) -> usize {
        match self.max_message_bytes {
            0 => usize::MAX,
            limit => limit,
        }
    }

    /// Transform `incoming` and hand it to the next ordinal.
    ///
    /// Any failure to reach the next peer means this node is the last one:
    /// ordinal zero gets exactly one best-effort `/finish` call.
    pub async fn relay(&self, incoming: &str, request_id: &str) -> RelayOutcome {
        let ordinal = self.identity.ordinal();
        let message = next_message(ordinal, incoming);

        let Some(next) = ordinal.checked_add(1) else {
            tracing::warn!(ordinal, "No ordinal after this node, ending chain");
            return self.end_chain(message, request_id).await;
        };

        let url = self.peers.url(next, Endpoint::Ping);
        match self.transport.post(&url, &message, request_id).await {
            Ok(()) => {
                tracing::info!(next, request_id = %request_id, "Relayed message to next pod");
                metrics::record_forward("forwarded");
                RelayOutcome::Forwarded { to: next, message }
            }
            Err(e) => {
                tracing::info!(
                    next,
                    error = %e,
                    "Could not reach next pod, assuming this is the last pod in the chain"
                );
                self.end_chain(message, request_id).await
            }
        }
    }

    async fn end_chain(&self, message: String, request_id: &str) -> RelayOutcome {
        metrics::record_forward("chain_end");
        tracing::info!(message = %message, "Calling back to pod-0 with final message");

        let origin_notified = self.notify_origin(&message, request_id).await.is_ok();
        RelayOutcome::ChainEnded {
            message,
            origin_notified,
        }
    }

    /// Best-effort delivery of the final message to ordinal zero.
    ///
    /// Failure is logged here and never retried; callers may drop the result.
    pub async fn notify_origin(&self, message: &str, request_id: &str) -> Result<(), RelayError> {
        let url = self.peers.url(0, Endpoint::Finish);
        let result = self.transport.post(&url, message, request_id).await;

        match &result {
            Ok(()) => metrics::record_origin_callback("delivered"),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Callback to pod-0 failed");
                metrics::record_origin_callback("failed");
            }
        }
        result
    }

    /// Log a completed chain. Only meaningful on ordinal zero.
    pub fn record_finish(&self, message: &str) {
        metrics::record_chain_completed();
        tracing::info!("--- PING PONG SEQUENCE COMPLETE ---");
        tracing::info!(final_message = %message, "Final message: {}", message);
        tracing::info!("---------------------------------");
    }
}
