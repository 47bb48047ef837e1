//! Core Error Types
//!
//! Error definitions shared across the mint pipeline crates.

use thiserror::Error;

use crate::types::MintStage;

/// Core mint error
#[derive(Error, Debug)]
pub enum MintError {
    /// A required form field is blank
    #[error("Details not complete: {field} is blank")]
    IncompleteField { field: &'static str },

    /// Price does not parse as a positive decimal
    #[error("Invalid price: {value}")]
    InvalidPrice { value: String },

    /// The image source is the no-drawing placeholder
    #[error("No image to mint: draw a pixel art first")]
    MissingImage,

    /// Illegal stage transition
    #[error("Invalid stage transition: {from} -> {to}")]
    StageTransition { from: MintStage, to: MintStage },

    /// Metadata serialization error
    #[error("Metadata serialization failed: {0}")]
    Serialization(String),
}

/// Core result type
pub type MintResult<T> = Result<T, MintError>;

impl From<serde_json::Error> for MintError {
    fn from(e: serde_json::Error) -> Self {
        MintError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_field_message() {
        let err = MintError::IncompleteField { field: "name" };
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_invalid_price_message() {
        let err = MintError::InvalidPrice {
            value: "-1".to_string(),
        };
        assert!(err.to_string().contains("-1"));
    }
}
