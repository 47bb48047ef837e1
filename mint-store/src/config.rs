//! Store Configuration
//!
//! Configuration for the content store HTTP client. Supports loading from
//! environment variables with the MINT_STORE_ prefix.

use serde::{Deserialize, Serialize};
use std::env;

/// Content store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store API base URL (IPFS HTTP API)
    pub api_url: String,
    /// Gateway base used to derive retrieval URIs
    pub gateway_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            api_url: "https://ipfs.infura.io:5001".to_string(),
            gateway_url: "https://ipfs.infura.io/ipfs".to_string(),
            timeout_secs: 30,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - MINT_STORE_API_URL: store API base URL
    /// - MINT_STORE_GATEWAY_URL: gateway base for retrieval URIs
    /// - MINT_STORE_TIMEOUT: request timeout in seconds
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env::var("MINT_STORE_API_URL").unwrap_or(defaults.api_url),
            gateway_url: env::var("MINT_STORE_GATEWAY_URL").unwrap_or(defaults.gateway_url),
            timeout_secs: env::var("MINT_STORE_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    /// Configuration for a local development node
    pub fn development() -> Self {
        Self {
            api_url: "http://127.0.0.1:5001".to_string(),
            gateway_url: "http://127.0.0.1:8080/ipfs".to_string(),
            timeout_secs: 10,
        }
    }

    /// Override the gateway base
    pub fn with_gateway(mut self, gateway_url: impl Into<String>) -> Self {
        self.gateway_url = gateway_url.into();
        self
    }
}
