//! Shutdown coordination.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

/// Server lifecycle: `Running → ShuttingDown → Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Running,
    ShuttingDown,
    Stopped,
}

/// What asked the server to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownCause {
    /// SIGINT / Ctrl+C.
    Interrupt,
    /// SIGTERM.
    Terminate,
    /// The control server's shutdown button.
    HttpTrigger,
}

impl fmt::Display for ShutdownCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShutdownCause::Interrupt => "interrupt",
            ShutdownCause::Terminate => "terminate",
            ShutdownCause::HttpTrigger => "http_trigger",
        };
        f.write_str(name)
    }
}

/// How the `ShuttingDown → Stopped` transition happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// All in-flight requests finished inside the grace period.
    Graceful,
    /// The grace period elapsed first.
    Forced,
}

/// Coordinator for graceful shutdown.
///
/// Cloning is cheap; every clone observes and drives the same state.
#[derive(Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<ServerState>>,
}

impl Shutdown {
    /// Create a new shutdown coordinator in the `Running` state.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(ServerState::Running);
        Self { tx: Arc::new(tx) }
    }

    /// Move `Running → ShuttingDown`. Returns `false` if shutdown had
    /// already begun, in which case nothing changes.
    pub fn trigger(&self, cause: ShutdownCause) -> bool {
        let started = self.tx.send_if_modified(|state| {
            if *state == ServerState::Running {
                *state = ServerState::ShuttingDown;
                true
            } else {
                false
            }
        });

        if started {
            tracing::info!(%cause, "Shutdown signal received, starting graceful shutdown");
        } else {
            tracing::debug!(%cause, "Shutdown already in progress");
        }
        started
    }

    pub fn state(&self) -> ServerState {
        *self.tx.borrow()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ServerState> {
        self.tx.subscribe()
    }

    /// A future that resolves once shutdown has begun.
    pub fn signalled(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut rx = self.subscribe();
        async move {
            // Err only if the sender is gone, which also means stop.
            let _ = rx.wait_for(|state| *state != ServerState::Running).await;
        }
    }

    /// Record `ShuttingDown → Stopped`.
    pub fn mark_stopped(&self, outcome: ShutdownOutcome) {
        self.tx.send_replace(ServerState::Stopped);
        match outcome {
            ShutdownOutcome::Graceful => tracing::info!("Server shut down gracefully"),
            ShutdownOutcome::Forced => tracing::warn!("Graceful shutdown failed, server stopped forcibly"),
        }
    }

    /// Get the number of active subscribers.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
