//! Mint Pipeline Driver
//!
//! Drives one mint attempt through its stages with a single step loop, so
//! every failure path is an enumerable transition instead of a swallowed
//! promise rejection:
//!
//! ```text
//! validate ──→ upload image ──→ upload metadata ──→ create sale ──→ minted
//!                   │                  │                  │
//!                   └──────────────────┴──────────────────┴──→ failed
//! ```
//!
//! All network calls are awaited in strict sequence; nothing runs
//! concurrently and there is no cancellation once minting starts. The
//! pipeline owns the stage state machine for the flow; the form owns the
//! field state.

use tracing::{info, warn};

use mint_core::{
    ContentAsset, ImageSource, MintForm, MintReceipt, MintRequest, MintStage, Route,
    TokenMetadata,
};
use mint_store::ContentStore;

use crate::error::PipelineResult;
use crate::marketplace::{Account, Marketplace};
use crate::notify::Notifier;

/// Progress label shown while the image uploads
pub const LABEL_UPLOAD_IMAGE: &str = "Uploading the pixel art";
/// Progress label shown while the metadata document uploads
pub const LABEL_UPLOAD_METADATA: &str = "Adding the NFT to the blockchain";
/// Progress label shown while the listing transaction confirms
pub const LABEL_CREATE_SALE: &str = "Putting the token on the marketplace";

/// Outcome of a submitted mint flow
#[derive(Debug, Clone)]
pub struct MintOutcome {
    /// Stage the flow ended in
    pub stage: MintStage,
    /// Where the caller should navigate, if anywhere
    pub route: Option<Route>,
    /// Receipt of the attempt (absent when nothing was attempted)
    pub receipt: Option<MintReceipt>,
}

/// Named steps of one mint attempt
enum MintStep {
    UploadImage,
    UploadMetadata { image: ContentAsset },
    CreateSale { metadata: ContentAsset },
}

/// The mint workflow driver
///
/// Collaborators are injected: content store, marketplace capability and
/// notification sink. The pipeline holds the stage machine for the current
/// attempt; call [`MintPipeline::reset`] to start a fresh one after a
/// terminal stage.
pub struct MintPipeline<S, M, N> {
    store: S,
    market: M,
    notifier: N,
    stage: MintStage,
    receipt: Option<MintReceipt>,
}

impl<S, M, N> MintPipeline<S, M, N>
where
    S: ContentStore,
    M: Marketplace,
    N: Notifier,
{
    /// Create a pipeline over the given collaborators
    pub fn new(store: S, market: M, notifier: N) -> Self {
        Self {
            store,
            market,
            notifier,
            stage: MintStage::NotStarted,
            receipt: None,
        }
    }

    /// Current stage of the flow
    pub fn stage(&self) -> MintStage {
        self.stage
    }

    /// Receipt of the last attempt, if one ran
    pub fn receipt(&self) -> Option<&MintReceipt> {
        self.receipt.as_ref()
    }

    /// Discard the terminated attempt and return to the editing state
    ///
    /// Terminal attempts are never resumed; a new submission is a new
    /// attempt from scratch.
    pub fn reset(&mut self) {
        self.stage = MintStage::NotStarted;
        self.receipt = None;
    }

    /// Submit the form and drive the attempt to a terminal stage
    ///
    /// - Placeholder image: prompt the user to draw, route to the editor,
    ///   stage untouched, nothing uploaded.
    /// - Incomplete form or bad price: error surfaced as a notification and
    ///   returned with a [`Route::Create`] hint, stage untouched, nothing
    ///   uploaded.
    /// - Upload or listing failure: stage moves to `Failed`, the error is
    ///   notified and returned, no navigation.
    /// - Success: stage `Minted`, success notification, route to the
    ///   landing view.
    pub async fn submit(
        &mut self,
        form: &MintForm,
        account: &Account,
    ) -> PipelineResult<MintOutcome> {
        // Nothing drawn yet: short-circuit to the prompt before any
        // validation or upload.
        if form.image().is_placeholder() {
            self.notifier.notify_prompt("Create a pixel art to mint!");
            return Ok(MintOutcome {
                stage: self.stage,
                route: Some(Route::Draw),
                receipt: None,
            });
        }

        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                self.notifier
                    .notify_error("Details not complete", &e.to_string());
                return Err(e.into());
            }
        };

        self.stage.transition_to(MintStage::Minting)?;
        let mut receipt = MintReceipt::begin();

        info!(
            attempt_id = %receipt.attempt_id,
            account = %account,
            name = %request.name,
            "Mint attempt started"
        );

        let mut step = MintStep::UploadImage;
        loop {
            step = match self.advance(step, &request, account, &mut receipt).await {
                Ok(Some(next)) => next,
                Ok(None) => break,
                Err(e) => {
                    if let Err(te) = self.stage.transition_to(MintStage::Failed) {
                        warn!(error = %te, "Stage transition to failed rejected");
                        self.stage = MintStage::Failed;
                    }
                    receipt.finish(MintStage::Failed);
                    warn!(
                        attempt_id = %receipt.attempt_id,
                        error = %e,
                        "Mint attempt failed"
                    );
                    self.notifier.notify_error("Mint failed", &e.to_string());
                    self.receipt = Some(receipt);
                    return Err(e);
                }
            };
        }

        self.stage.transition_to(MintStage::Minted)?;
        receipt.finish(MintStage::Minted);

        info!(
            attempt_id = %receipt.attempt_id,
            listing = ?receipt.sale,
            "Mint attempt complete"
        );
        self.notifier.notify_success(
            "NFT minted",
            "Your NFT has been minted successfully",
        );

        let outcome = MintOutcome {
            stage: self.stage,
            route: Some(Route::Home),
            receipt: Some(receipt.clone()),
        };
        self.receipt = Some(receipt);
        Ok(outcome)
    }

    /// Run one step and name the next; `None` means the attempt is done
    async fn advance(
        &self,
        step: MintStep,
        request: &MintRequest,
        account: &Account,
        receipt: &mut MintReceipt,
    ) -> PipelineResult<Option<MintStep>> {
        match step {
            MintStep::UploadImage => {
                self.notifier
                    .stage_changed(MintStage::Minting, LABEL_UPLOAD_IMAGE);

                let image = match &request.image {
                    ImageSource::Bytes(bytes) => self.store.add(bytes).await?,
                    // Already hosted: carry the URI through without a
                    // second upload.
                    ImageSource::Uri(uri) => ContentAsset {
                        path: uri.rsplit('/').next().unwrap_or(uri).to_string(),
                        uri: uri.clone(),
                        size: 0,
                    },
                    // Short-circuited in submit().
                    ImageSource::Placeholder => {
                        return Err(mint_core::MintError::MissingImage.into())
                    }
                };

                info!(operation = "upload_image", uri = %image.uri, "Image stored");
                receipt.image = Some(image.clone());
                Ok(Some(MintStep::UploadMetadata { image }))
            }

            MintStep::UploadMetadata { image } => {
                self.notifier
                    .stage_changed(MintStage::Minting, LABEL_UPLOAD_METADATA);

                // The document must embed the exact URI the image upload
                // returned; marketplaces resolve the asset through it.
                let document = TokenMetadata::new(
                    request.name.as_str(),
                    request.description.as_str(),
                    image.uri.as_str(),
                );
                let metadata = self.store.add_json(&document).await?;

                info!(operation = "upload_metadata", uri = %metadata.uri, "Metadata stored");
                receipt.metadata = Some(metadata.clone());
                Ok(Some(MintStep::CreateSale { metadata }))
            }

            MintStep::CreateSale { metadata } => {
                self.notifier
                    .stage_changed(MintStage::Minting, LABEL_CREATE_SALE);

                let sale = self
                    .market
                    .create_sale(&metadata.uri, &request.price, account)
                    .await?;

                info!(
                    operation = "create_sale",
                    listing_id = %sale.listing_id,
                    tx_hash = %sale.tx_hash,
                    "Listing confirmed"
                );
                receipt.sale = Some(sale);
                Ok(None)
            }
        }
    }
}
