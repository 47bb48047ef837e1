//! Content Asset
//!
//! Result of uploading bytes to the content-addressed store. The retrieval
//! URI is derived deterministically as `<gateway-base>/<path>`.

use serde::{Deserialize, Serialize};

/// An uploaded, content-addressed asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentAsset {
    /// Content-addressed path returned by the store (e.g. an IPFS hash)
    pub path: String,
    /// Full retrieval URI (`<gateway-base>/<path>`)
    pub uri: String,
    /// Uploaded size in bytes
    pub size: u64,
}

impl ContentAsset {
    /// Derive the retrieval URI for a store path
    pub fn derive_uri(gateway_base: &str, path: &str) -> String {
        format!("{}/{}", gateway_base.trim_end_matches('/'), path)
    }

    /// Build an asset from a store path and gateway base
    pub fn new(gateway_base: &str, path: impl Into<String>, size: u64) -> Self {
        let path = path.into();
        let uri = Self::derive_uri(gateway_base, &path);
        Self { path, uri, size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_derivation() {
        let asset = ContentAsset::new("https://gateway.example/ipfs", "Qmabc123", 42);
        assert_eq!(asset.uri, "https://gateway.example/ipfs/Qmabc123");
        assert_eq!(asset.path, "Qmabc123");
        assert_eq!(asset.size, 42);
    }

    #[test]
    fn test_uri_derivation_trailing_slash() {
        let uri = ContentAsset::derive_uri("https://gateway.example/ipfs/", "Qmabc123");
        assert_eq!(uri, "https://gateway.example/ipfs/Qmabc123");
    }
}
