//! Peer addressing.
//!
//! Addresses are computed per call and never cached, so a peer that comes
//! up between hops is picked up on the next one.

use crate::config::{NodeEnv, PeerConfig};
use crate::relay::identity::NodeIdentity;

/// Endpoints a relay node can call on a peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Ping,
    Finish,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Ping => "/ping",
            Endpoint::Finish => "/finish",
        }
    }
}

/// Everything needed to turn an ordinal into a URL.
#[derive(Debug, Clone)]
pub struct PeerDirectory {
    prefix: String,
    service: String,
    namespace: String,
    cluster_domain: String,
    port: u16,
}

impl PeerDirectory {
    pub fn new(identity: &NodeIdentity, env: &NodeEnv, peers: &PeerConfig) -> Self {
        Self {
            prefix: identity.prefix().to_string(),
            service: env.service_name.clone(),
            namespace: env.namespace.clone(),
            cluster_domain: peers.cluster_domain.clone(),
            port: peers.port,
        }
    }

    /// `<prefix>-<ordinal>.<service>.<namespace>.<cluster_domain>`
    pub fn host(&self, ordinal: u32) -> String {
        format!(
            "{}-{}.{}.{}.{}",
            self.prefix, ordinal, self.service, self.namespace, self.cluster_domain
        )
    }

    pub fn url(&self, ordinal: u32, endpoint: Endpoint) -> String {
        format!("http://{}:{}{}", self.host(ordinal), self.port, endpoint.path())
    }
}
