//! Mint Pipeline - Four-Stage Mint Workflow
//!
//! The workflow behind "Mint NFT": validate the form, upload the image to
//! the content store, upload the metadata document embedding the image URI,
//! then hand the metadata URI and price to the marketplace capability that
//! performs the on-chain listing.
//!
//! # Architecture
//!
//! - **MintPipeline**: owns the stage state machine and drives the steps in
//!   strict sequence; collaborators are injected, never ambient
//! - **Marketplace**: capability trait over the listing transaction, with an
//!   HTTP wallet-gateway implementation
//! - **Notifier**: user-facing notification seam (the toast surface)
//!
//! # Failure policy
//!
//! Any upload or transaction failure moves the attempt to `Failed`, surfaces
//! the error through the notifier and the returned `Result`, and produces no
//! navigation. Attempts are never resumed; a fresh attempt starts over.
//!
//! # Usage
//!
//! ```rust,no_run
//! use mint_core::{ImageSource, MintForm};
//! use mint_pipeline::{Account, HttpMarketplace, MarketConfig, MintPipeline, TracingNotifier};
//! use mint_store::{IpfsClient, StoreConfig};
//!
//! async fn example() {
//!     let store = IpfsClient::new(StoreConfig::from_env()).unwrap();
//!     let market = HttpMarketplace::new(MarketConfig::from_env()).unwrap();
//!     let mut pipeline = MintPipeline::new(store, market, TracingNotifier);
//!
//!     let mut form = MintForm::new();
//!     form.set_name("Pixel Cat");
//!     form.set_description("An 8x8 cat");
//!     form.set_price("0.05");
//!     form.set_image(ImageSource::Bytes(vec![0u8; 64]));
//!
//!     let account = Account::new("0xabc123");
//!     let outcome = pipeline.submit(&form, &account).await.unwrap();
//!     println!("minted, go to {:?}", outcome.route);
//! }
//! ```

pub mod error;
pub mod marketplace;
pub mod notify;
pub mod pipeline;

pub use error::{PipelineError, PipelineResult};
pub use marketplace::{Account, HttpMarketplace, MarketConfig, Marketplace};
pub use notify::{Notifier, TracingNotifier};
pub use pipeline::{MintOutcome, MintPipeline};
