//! IPFS HTTP Client
//!
//! Client for an IPFS-compatible content store API. Uploads go to
//! `/api/v0/add`; the store answers with the content-addressed path and the
//! retrieval URI is derived from the configured gateway base.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use mint_core::ContentAsset;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

/// Content-addressed store interface
///
/// `add` uploads raw bytes and returns the asset with its derived retrieval
/// URI; `add_json` serializes a document and uploads the JSON bytes.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Upload raw bytes, returning the content-addressed asset
    async fn add(&self, bytes: &[u8]) -> StoreResult<ContentAsset>;

    /// Check the store is reachable
    async fn ping(&self) -> StoreResult<()>;

    /// Serialize a document to JSON and upload it
    async fn add_json<T: Serialize + Sync>(&self, value: &T) -> StoreResult<ContentAsset> {
        let bytes = serde_json::to_vec(value)?;
        self.add(&bytes).await
    }
}

/// `/api/v0/add` response
#[derive(Debug, Deserialize)]
struct AddResponse {
    #[serde(rename = "Hash")]
    hash: String,
    #[serde(rename = "Size")]
    size: String,
}

/// IPFS HTTP API client
pub struct IpfsClient {
    /// HTTP client
    client: Client,
    /// Store configuration
    config: StoreConfig,
}

impl IpfsClient {
    /// Create a new client
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Store configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

#[async_trait]
impl ContentStore for IpfsClient {
    async fn add(&self, bytes: &[u8]) -> StoreResult<ContentAsset> {
        if bytes.is_empty() {
            return Err(StoreError::EmptyPayload);
        }

        let url = format!("{}/api/v0/add", self.config.api_url.trim_end_matches('/'));
        let form = Form::new().part("file", Part::bytes(bytes.to_vec()).file_name("asset"));

        debug!(operation = "add", size = bytes.len(), "Uploading to content store");

        let response = self.client.post(&url).multipart(form).send().await?;

        if !response.status().is_success() {
            return Err(StoreError::Rejected {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let added: AddResponse = response.json().await?;
        let size = added
            .size
            .parse()
            .map_err(|_| StoreError::InvalidResponse(format!("bad size field: {}", added.size)))?;

        debug!(operation = "add", path = %added.hash, "Upload complete");

        Ok(ContentAsset::new(&self.config.gateway_url, added.hash, size))
    }

    async fn ping(&self) -> StoreResult<()> {
        let url = format!(
            "{}/api/v0/version",
            self.config.api_url.trim_end_matches('/')
        );
        let response = self.client.post(&url).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(StoreError::Rejected {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_response_shape() {
        let json = r#"{"Name":"asset","Hash":"QmPixel","Size":"123"}"#;
        let parsed: AddResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.hash, "QmPixel");
        assert_eq!(parsed.size, "123");
    }

    #[tokio::test]
    async fn test_empty_payload_rejected_locally() {
        let client = IpfsClient::new(StoreConfig::development()).unwrap();
        let err = client.add(&[]).await.unwrap_err();
        assert!(matches!(err, StoreError::EmptyPayload));
    }
}
