//! Control server: a status page with a shutdown button.
//!
//! # Data Flow
//! ```text
//! GET /           → handlers::index (static HTML form)
//! POST /shutdown  → handlers::shutdown → Shutdown::trigger(HttpTrigger)
//!                 → http::HttpServer drains and stops
//! ```

pub mod handlers;
pub mod page;

use axum::{
    routing::{get, post},
    Router,
};

use crate::lifecycle::Shutdown;

pub fn router(shutdown: Shutdown) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/shutdown", post(handlers::shutdown))
        .with_state(shutdown)
}
