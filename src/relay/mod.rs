//! Ping-pong relay subsystem.
//!
//! # Data Flow
//! ```text
//! POST /ping (from ordinal N-1 or an operator)
//!     → handlers.rs (hop delay, read body)
//!     → message.rs (seed on ordinal 0, append " ping"/" pong" otherwise)
//!     → node.rs → peer.rs (URL of ordinal N+1) → transport.rs (POST)
//!         ok  → done
//!         err → transport.rs (POST ordinal 0 /finish, best effort)
//!     → "OK"
//!
//! POST /finish (ordinal 0 only)
//!     → node.rs (log final message) → "Cycle complete."
//! ```
//!
//! # Design Decisions
//! - Identity is parsed once and owned by `RelayNode`; no process globals
//! - Any outbound failure ends the chain; there are no retries
//! - Peer URLs are computed per call

pub mod error;
pub mod handlers;
pub mod identity;
pub mod message;
pub mod node;
pub mod peer;
pub mod transport;

use axum::{routing::post, Router};
use std::sync::Arc;

pub use error::RelayError;
pub use identity::NodeIdentity;
pub use node::{RelayNode, RelayOutcome};
pub use peer::{Endpoint, PeerDirectory};
pub use transport::{HttpTransport, PeerTransport};

/// Routes for a relay node. `/finish` exists only on ordinal zero.
pub fn router(node: Arc<RelayNode>) -> Router {
    let mut router = Router::new().route(
        "/ping",
        post(handlers::ping).fallback(handlers::method_not_allowed),
    );

    if node.identity().is_origin() {
        router = router.route(
            "/finish",
            post(handlers::finish).fallback(handlers::method_not_allowed),
        );
    }

    router.with_state(node)
}
