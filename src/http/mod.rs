//! HTTP plumbing shared by both servers.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum serve, graceful shutdown with grace period)
//!     → request.rs (set/propagate x-request-id)
//!     → TraceLayer (request span)
//!     → relay or control router
//! ```

pub mod request;
pub mod server;

pub use request::{request_id, MakeChainRequestId, X_REQUEST_ID};
pub use server::HttpServer;
