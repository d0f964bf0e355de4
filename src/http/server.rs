//! HTTP server setup and graceful shutdown.
//!
//! # Responsibilities
//! - Wire up the common middleware (request id, tracing)
//! - Serve a router on a bound listener
//! - Stop accepting on shutdown and drain within the grace period
//! - Force the stop when the grace period elapses

use axum::{http::HeaderName, Router};
use std::future::IntoFuture;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::http::request::{MakeChainRequestId, X_REQUEST_ID};
use crate::lifecycle::{Shutdown, ShutdownOutcome};

/// HTTP server with bounded graceful shutdown.
pub struct HttpServer {
    router: Router,
    grace_period: Duration,
}

impl HttpServer {
    /// Create a server for `router`. In-flight requests get `grace_period`
    /// to finish once shutdown begins.
    pub fn new(router: Router, grace_period: Duration) -> Self {
        Self {
            router: Self::with_layers(router),
            grace_period,
        }
    }

    /// Layers run outermost-last: the id is set before the trace span opens.
    fn with_layers(router: Router) -> Router {
        let header = HeaderName::from_static(X_REQUEST_ID);
        router
            .layer(PropagateRequestIdLayer::new(header.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(header, MakeChainRequestId))
    }

    /// Run until `shutdown` is triggered and the server has drained or the
    /// grace period has elapsed. Marks `shutdown` as stopped on return.
    pub async fn run(self, listener: TcpListener, shutdown: Shutdown) -> Result<ShutdownOutcome, std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let serve = axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.signalled())
            .into_future();
        tokio::pin!(serve);

        let outcome = tokio::select! {
            result = &mut serve => {
                result?;
                ShutdownOutcome::Graceful
            }
            _ = shutdown.signalled() => {
                tracing::info!(
                    grace_period_secs = self.grace_period.as_secs(),
                    "Stopped accepting connections, draining in-flight requests"
                );
                match tokio::time::timeout(self.grace_period, &mut serve).await {
                    Ok(result) => {
                        result?;
                        ShutdownOutcome::Graceful
                    }
                    Err(_) => {
                        tracing::warn!("Grace period elapsed, forcing shutdown");
                        ShutdownOutcome::Forced
                    }
                }
            }
        };

        shutdown.mark_stopped(outcome);
        tracing::info!(?outcome, "HTTP server stopped");
        Ok(outcome)
    }
}
