//! Mint Receipt
//!
//! Terminal record of one mint attempt plus the navigation outcome the
//! caller should act on. Receipts live in memory for the duration of the
//! attempt only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::asset::ContentAsset;
use super::stage::MintStage;

/// Navigation outcome of a mint flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Landing view - shown after a successful mint
    Home,
    /// Drawing editor - shown when there is nothing to mint yet
    Draw,
    /// Mint form - shown while editing or after a rejected submission
    Create,
}

impl Route {
    /// Route path as the application addresses it
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Draw => "/draw",
            Self::Create => "/create",
        }
    }
}

/// Listing confirmation echoed by the marketplace gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleTicket {
    /// Marketplace listing identifier
    pub listing_id: String,
    /// On-chain transaction hash of the listing
    pub tx_hash: String,
}

/// Record of a single mint attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintReceipt {
    /// Attempt identifier
    pub attempt_id: Uuid,
    /// Terminal stage of the attempt
    pub stage: MintStage,
    /// Uploaded image asset (present once the image upload succeeded)
    pub image: Option<ContentAsset>,
    /// Uploaded metadata document (present once the metadata upload succeeded)
    pub metadata: Option<ContentAsset>,
    /// Marketplace confirmation (present on success)
    pub sale: Option<SaleTicket>,
    /// When the attempt entered the pipeline
    pub started_at: DateTime<Utc>,
    /// When the attempt terminated
    pub finished_at: Option<DateTime<Utc>>,
}

impl MintReceipt {
    /// Open a receipt for a new attempt
    pub fn begin() -> Self {
        Self {
            attempt_id: Uuid::new_v4(),
            stage: MintStage::NotStarted,
            image: None,
            metadata: None,
            sale: None,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Close the receipt at its terminal stage
    pub fn finish(&mut self, stage: MintStage) {
        self.stage = stage;
        self.finished_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Draw.path(), "/draw");
        assert_eq!(Route::Create.path(), "/create");
    }

    #[test]
    fn test_receipt_lifecycle() {
        let mut receipt = MintReceipt::begin();
        assert_eq!(receipt.stage, MintStage::NotStarted);
        assert!(receipt.finished_at.is_none());

        receipt.finish(MintStage::Minted);
        assert_eq!(receipt.stage, MintStage::Minted);
        assert!(receipt.finished_at.is_some());
    }
}
