//! Core Types Module
//!
//! Data model for a single mint attempt. A `MintRequest` is constructed from
//! form state at submission time and discarded after the pipeline terminates;
//! nothing here persists across runs.

pub mod asset;
pub mod receipt;
pub mod request;
pub mod stage;

pub use asset::ContentAsset;
pub use receipt::{MintReceipt, Route, SaleTicket};
pub use request::{ImageSource, MintRequest};
pub use stage::MintStage;
