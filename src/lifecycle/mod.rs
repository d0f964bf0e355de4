//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! HTTP trigger (control server):
//!     POST /shutdown → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     Running → ShuttingDown (first trigger wins)
//!     → server stops accepting, drains within grace period
//!     → Stopped (Graceful or Forced)
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::{ServerState, Shutdown, ShutdownCause, ShutdownOutcome};
pub use signals::spawn_signal_listener;
