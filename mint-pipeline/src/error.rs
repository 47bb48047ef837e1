//! Pipeline Error Types
//!
//! Error definitions for the mint workflow. Every failure path of the driver
//! is represented here; nothing is swallowed into a log line.

use thiserror::Error;

use mint_core::{MintError, Route};
use mint_store::StoreError;

/// Mint pipeline error
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Form validation failed - pipeline state untouched
    #[error(transparent)]
    Validation(#[from] MintError),

    /// Content store upload failed
    #[error("Content store error: {0}")]
    Store(#[from] StoreError),

    /// Could not reach the marketplace gateway
    #[error("Marketplace connection failed: {0}")]
    MarketConnection(String),

    /// Marketplace gateway rejected the listing
    #[error("Marketplace rejected listing: status {status} - {message}")]
    MarketRejected { status: u16, message: String },

    /// Marketplace response did not match the expected shape
    #[error("Unexpected marketplace response: {0}")]
    MarketResponse(String),
}

/// Pipeline result type
pub type PipelineResult<T> = Result<T, PipelineError>;

impl PipelineError {
    /// True when the failure happened before any network call was issued
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Where the caller should send the user after this failure
    ///
    /// A rejected submission keeps the user on the mint form; failures
    /// during an attempt produce no navigation at all.
    pub fn route(&self) -> Option<Route> {
        if self.is_validation() {
            Some(Route::Create)
        } else {
            None
        }
    }
}

impl From<reqwest::Error> for PipelineError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            PipelineError::MarketConnection(e.to_string())
        } else {
            PipelineError::MarketResponse(e.to_string())
        }
    }
}
