//! Control server handlers.

use axum::{extract::State, response::Html};

use crate::control::page::CONTROL_PAGE;
use crate::lifecycle::{Shutdown, ShutdownCause};
use crate::observability::metrics;

pub const SHUTDOWN_ACK: &str = "Shutdown command received";

pub async fn index() -> Html<&'static str> {
    Html(CONTROL_PAGE)
}

/// Acknowledge first; the trigger runs on its own task.
pub async fn shutdown(State(shutdown): State<Shutdown>) -> &'static str {
    tokio::spawn(async move {
        metrics::record_shutdown_trigger(ShutdownCause::HttpTrigger);
        shutdown.trigger(ShutdownCause::HttpTrigger);
    });
    SHUTDOWN_ACK
}
