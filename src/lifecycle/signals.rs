//! OS signal handling.
//!
//! SIGINT and SIGTERM both start a graceful shutdown, exactly like the
//! control server's HTTP trigger.

use tokio::task::JoinHandle;

use crate::lifecycle::shutdown::{Shutdown, ShutdownCause};
use crate::observability::metrics;

/// Spawn a task that triggers `shutdown` on the first SIGINT/SIGTERM.
pub fn spawn_signal_listener(shutdown: Shutdown) -> JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(cause) => {
                metrics::record_shutdown_trigger(cause);
                shutdown.trigger(cause);
            }
            Err(e) => tracing::error!(error = %e, "Failed to install signal handlers"),
        }
    })
}

#[cfg(unix)]
async fn wait_for_signal() -> std::io::Result<ShutdownCause> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result?;
            Ok(ShutdownCause::Interrupt)
        }
        _ = terminate.recv() => Ok(ShutdownCause::Terminate),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> std::io::Result<ShutdownCause> {
    tokio::signal::ctrl_c().await?;
    Ok(ShutdownCause::Interrupt)
}
