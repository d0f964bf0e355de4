//! Node identity from the process environment.

use crate::config::loader::ConfigError;

pub const POD_NAME_VAR: &str = "POD_NAME";
pub const NAMESPACE_VAR: &str = "NAMESPACE";
pub const SERVICE_NAME_VAR: &str = "SERVICE_NAME";

/// Raw identity values a relay node needs before it can serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeEnv {
    /// `<prefix>-<ordinal>`, normally the StatefulSet pod name.
    pub pod_name: String,
    pub namespace: String,
    /// Headless service the peers are registered under.
    pub service_name: String,
}

impl NodeEnv {
    /// Read identity from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read identity through an arbitrary lookup. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingEnv(key))
        };

        Ok(Self {
            pod_name: required(POD_NAME_VAR)?,
            namespace: required(NAMESPACE_VAR)?,
            service_name: required(SERVICE_NAME_VAR)?,
        })
    }
}
