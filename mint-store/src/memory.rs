//! In-Memory Content Store
//!
//! Sha256-addressed store for tests and development runs. Identical bytes
//! always map to the same path, matching the content-addressing contract of
//! the real store.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use mint_core::ContentAsset;

use crate::client::ContentStore;
use crate::error::{StoreError, StoreResult};

/// Thread-safe in-memory content store
#[derive(Debug, Clone)]
pub struct MemoryStore {
    gateway_url: String,
    objects: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create a store deriving URIs from the given gateway base
    pub fn new(gateway_url: impl Into<String>) -> Self {
        Self {
            gateway_url: gateway_url.into(),
            objects: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Content-addressed path for a payload
    pub fn path_for(bytes: &[u8]) -> String {
        hex::encode(Sha256::digest(bytes))
    }

    /// Fetch stored bytes by path
    pub async fn get(&self, path: &str) -> Option<Vec<u8>> {
        let objects = self.objects.read().await;
        objects.get(path).cloned()
    }

    /// Number of stored objects
    pub async fn len(&self) -> usize {
        let objects = self.objects.read().await;
        objects.len()
    }

    /// True when nothing has been stored
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drop all stored objects
    pub async fn clear(&self) {
        self.objects.write().await.clear();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new("mem://store")
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn add(&self, bytes: &[u8]) -> StoreResult<ContentAsset> {
        if bytes.is_empty() {
            return Err(StoreError::EmptyPayload);
        }

        let path = Self::path_for(bytes);
        let size = bytes.len() as u64;

        let mut objects = self.objects.write().await;
        objects.insert(path.clone(), bytes.to_vec());

        Ok(ContentAsset::new(&self.gateway_url, path, size))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deterministic_addressing() {
        let store = MemoryStore::default();
        let a = store.add(b"pixel art").await.unwrap();
        let b = store.add(b"pixel art").await.unwrap();
        assert_eq!(a.path, b.path);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_round_trip() {
        let store = MemoryStore::new("https://gw.example/ipfs");
        let asset = store.add(b"bytes").await.unwrap();
        assert_eq!(asset.uri, format!("https://gw.example/ipfs/{}", asset.path));
        assert_eq!(store.get(&asset.path).await.unwrap(), b"bytes");
    }

    #[tokio::test]
    async fn test_add_json_embeds_document() {
        let store = MemoryStore::default();
        let doc = serde_json::json!({"name": "Pixel Cat"});
        let asset = store.add_json(&doc).await.unwrap();

        let stored = store.get(&asset.path).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&stored).unwrap();
        assert_eq!(parsed["name"], "Pixel Cat");
    }

    #[tokio::test]
    async fn test_empty_payload_rejected() {
        let store = MemoryStore::default();
        assert!(matches!(
            store.add(&[]).await,
            Err(StoreError::EmptyPayload)
        ));
    }
}
