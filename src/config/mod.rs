//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, defaults for every field)
//!     → validation.rs (semantic checks)
//!     → RelayConfig / ControlConfig (validated, immutable)
//!
//! process environment
//!     → env.rs (POD_NAME, NAMESPACE, SERVICE_NAME)
//!     → relay::NodeIdentity (parsed once at startup)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded and handed to handlers at construction
//! - All file fields have defaults so a missing file is a valid config
//! - Node identity only comes from the environment; absence is fatal
//! - Validation separates syntactic (serde) from semantic checks

pub mod env;
pub mod loader;
pub mod schema;
pub mod validation;

pub use env::NodeEnv;
pub use loader::{load_control_config, load_relay_config, ConfigError};
pub use schema::{
    ControlConfig, ControlListenerConfig, ListenerConfig, ObservabilityConfig, PeerConfig, RelayConfig,
    RelayTimingConfig, ShutdownConfig,
};
