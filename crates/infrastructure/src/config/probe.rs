//! TLS certificate probe configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the TLS certificate probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Overall bound on connect plus handshake, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Port to connect to
    #[serde(default = "default_port")]
    pub port: u16,
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_port() -> u16 {
    443
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            port: default_port(),
        }
    }
}
