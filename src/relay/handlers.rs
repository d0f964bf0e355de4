//! Relay endpoint handlers.

use axum::{
    body::Body,
    extract::State,
    http::HeaderMap,
};
use std::sync::Arc;

use crate::http::request_id;
use crate::observability::metrics;
use crate::relay::error::RelayError;
use crate::relay::node::RelayNode;

pub const PING_ACK: &str = "OK\n";
pub const FINISH_ACK: &str = "Cycle complete.\n";

/// `POST /ping`: delay, transform, relay, acknowledge.
pub async fn ping(
    State(node): State<Arc<RelayNode>>,
    headers: HeaderMap,
    body: Body,
) -> Result<&'static str, RelayError> {
    tokio::time::sleep(node.hop_delay()).await;

    // Ordinal zero replaces whatever it gets with the seed, so its body is
    // never buffered or bounded.
    let incoming = if node.identity().is_origin() {
        drop(body);
        String::new()
    } else {
        read_message(body, node.body_limit()).await?
    };
    let request_id = request_id(&headers);

    metrics::record_hop_received();
    tracing::info!(
        pod = %node.identity(),
        request_id = %request_id,
        message = %incoming,
        "Received ping"
    );

    // Detached so a caller hanging up does not cancel downstream calls.
    let task_node = Arc::clone(&node);
    let relay = tokio::spawn(async move { task_node.relay(&incoming, &request_id).await });

    match relay.await {
        Ok(outcome) => tracing::debug!(?outcome, "Relay finished"),
        Err(e) => tracing::error!(error = %e, "Relay task failed"),
    }

    Ok(PING_ACK)
}

/// `POST /finish` on ordinal zero: log the completed chain.
pub async fn finish(State(node): State<Arc<RelayNode>>, body: Body) -> Result<&'static str, RelayError> {
    let message = read_message(body, node.body_limit())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error reading finish request body"))?;

    node.record_finish(&message);
    Ok(FINISH_ACK)
}

pub async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}

async fn read_message(body: Body, limit: usize) -> Result<String, RelayError> {
    let bytes = axum::body::to_bytes(body, limit)
        .await
        .map_err(|e| RelayError::BodyRead(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
