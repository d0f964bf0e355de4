//! Node identity: `<prefix>-<ordinal>`.

use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// A relay node's place in the ordered peer sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIdentity {
    name: String,
    prefix: String,
    ordinal: u32,
}

impl NodeIdentity {
    /// Parse a pod name. The ordinal is everything after the last `-`.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidIdentity {
            name: name.to_string(),
            reason,
        };

        let (prefix, suffix) = name
            .rsplit_once('-')
            .ok_or_else(|| invalid("expected '<prefix>-<ordinal>'".to_string()))?;

        if prefix.is_empty() {
            return Err(invalid("prefix is empty".to_string()));
        }

        let ordinal = suffix
            .parse::<u32>()
            .map_err(|e| invalid(format!("'{}' is not a non-negative integer: {}", suffix, e)))?;

        Ok(Self {
            name: name.to_string(),
            prefix: prefix.to_string(),
            ordinal,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    /// Ordinal zero starts every chain and receives the final message.
    pub fn is_origin(&self) -> bool {
        self.ordinal == 0
    }
}

impl FromStr for NodeIdentity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NodeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
