//! Marketplace Capability
//!
//! Abstraction over the on-chain listing call. The smart contract itself is
//! an external collaborator; this crate only carries the capability trait
//! and an HTTP implementation that posts the listing to a wallet gateway,
//! which signs and submits the transaction and answers once it is confirmed.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::debug;

use mint_core::SaleTicket;

use crate::error::{PipelineError, PipelineResult};

/// Wallet account the listing is made from
///
/// Passed explicitly to every `create_sale` call; there is no ambient
/// account context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account(String);

impl Account {
    /// Wrap a wallet address
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// The wallet address
    pub fn address(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Marketplace listing capability
#[async_trait]
pub trait Marketplace: Send + Sync {
    /// List the asset behind `metadata_uri` for sale at `price`
    ///
    /// Resolves once the listing transaction is confirmed.
    async fn create_sale(
        &self,
        metadata_uri: &str,
        price: &str,
        account: &Account,
    ) -> PipelineResult<SaleTicket>;

    /// Check the marketplace gateway is reachable
    async fn ping(&self) -> PipelineResult<()>;
}

/// Marketplace gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Gateway base URL
    pub base_url: String,
    /// Request timeout in seconds - listing waits for confirmation, so this
    /// is deliberately generous
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    300
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:4001".to_string(),
            timeout_secs: 300,
        }
    }
}

impl MarketConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - MINT_MARKET_URL: gateway base URL
    /// - MINT_MARKET_TIMEOUT: request timeout in seconds
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("MINT_MARKET_URL").unwrap_or(defaults.base_url),
            timeout_secs: env::var("MINT_MARKET_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}

/// Listing request sent to the gateway
#[derive(Debug, Serialize)]
struct CreateSaleRequest<'a> {
    metadata_uri: &'a str,
    price: &'a str,
    account: &'a str,
}

/// Listing confirmation returned by the gateway
#[derive(Debug, Deserialize)]
struct CreateSaleResponse {
    listing_id: String,
    tx_hash: String,
}

/// HTTP marketplace gateway client
pub struct HttpMarketplace {
    /// HTTP client
    client: Client,
    /// Gateway configuration
    config: MarketConfig,
}

impl HttpMarketplace {
    /// Create a new gateway client
    pub fn new(config: MarketConfig) -> PipelineResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PipelineError::MarketConnection(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Gateway configuration
    pub fn config(&self) -> &MarketConfig {
        &self.config
    }
}

#[async_trait]
impl Marketplace for HttpMarketplace {
    async fn create_sale(
        &self,
        metadata_uri: &str,
        price: &str,
        account: &Account,
    ) -> PipelineResult<SaleTicket> {
        let url = format!(
            "{}/api/v1/sales",
            self.config.base_url.trim_end_matches('/')
        );
        let request = CreateSaleRequest {
            metadata_uri,
            price,
            account: account.address(),
        };

        debug!(metadata_uri, price, account = %account, "Submitting listing");

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(PipelineError::MarketRejected {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let confirmed: CreateSaleResponse = response.json().await?;

        debug!(
            listing_id = %confirmed.listing_id,
            tx_hash = %confirmed.tx_hash,
            "Listing confirmed"
        );

        Ok(SaleTicket {
            listing_id: confirmed.listing_id,
            tx_hash: confirmed.tx_hash,
        })
    }

    async fn ping(&self) -> PipelineResult<()> {
        let url = format!(
            "{}/api/v1/health",
            self.config.base_url.trim_end_matches('/')
        );
        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(PipelineError::MarketRejected {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            })
        }
    }
}
