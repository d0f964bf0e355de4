//! Ping-pong relay and control server library.
//!
//! # Architecture Overview
//!
//! ```text
//!   operator ──POST /ping──▶ app-0 ──▶ app-1 ──▶ app-2 ──▶ ... ──▶ app-N ──╳ app-N+1
//!                              ▲                                     │
//!                              └────────── POST /finish ─────────────┘
//!
//!   browser ──GET /, POST /shutdown──▶ control server ──▶ graceful stop
//! ```
//!
//! Both servers share the same plumbing: `config` for startup settings,
//! `http` for the serve loop and middleware, `lifecycle` for shutdown, and
//! `observability` for logs and metrics.

// Services
pub mod control;
pub mod relay;

// Shared plumbing
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::{ControlConfig, RelayConfig};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
