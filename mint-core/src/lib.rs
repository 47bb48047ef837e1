//! Mint Core - Shared Types
//!
//! Core data model for the pixel-art NFT mint pipeline. This crate owns the
//! pieces every other crate agrees on:
//!
//! - **MintRequest / ImageSource**: what the user asked to mint
//! - **MintForm**: the form controller that gates submission
//! - **MintStage**: the one-directional progress state machine
//! - **TokenMetadata**: the JSON document uploaded alongside the image
//! - **MintReceipt / Route**: terminal record and navigation outcome
//!
//! No I/O happens here; the content store and marketplace collaborators live
//! in their own crates and are injected into the pipeline.

pub mod error;
pub mod form;
pub mod metadata;
pub mod types;

pub use error::{MintError, MintResult};
pub use form::MintForm;
pub use metadata::TokenMetadata;
pub use types::{
    ContentAsset, ImageSource, MintReceipt, MintRequest, MintStage, Route, SaleTicket,
};
