//! Mint Request
//!
//! The validated payload handed to the pipeline: image source plus the three
//! user-entered text fields. All four fields are non-empty by construction;
//! `MintForm::validate` is the only way to produce one.

use serde::{Deserialize, Serialize};

/// Source of the image to mint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ImageSource {
    /// Raw image bytes (drawn or uploaded by the user)
    Bytes(Vec<u8>),
    /// Already-hosted image, referenced by URI
    Uri(String),
    /// No drawing yet - the editor's sentinel value
    #[default]
    Placeholder,
}

impl ImageSource {
    /// True when this is the no-drawing sentinel
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// Byte length of the source, if it carries bytes
    pub fn len(&self) -> usize {
        match self {
            Self::Bytes(b) => b.len(),
            Self::Uri(u) => u.len(),
            Self::Placeholder => 0,
        }
    }

    /// True when the source carries no data
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single mint request
///
/// Lifecycle: built from `MintForm` at submission time, consumed by the
/// pipeline, dropped when the attempt terminates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintRequest {
    /// Image to upload to the content store
    pub image: ImageSource,
    /// NFT display name
    pub name: String,
    /// NFT description
    pub description: String,
    /// Listing price, decimal-as-string (validated positive)
    pub price: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_detection() {
        assert!(ImageSource::Placeholder.is_placeholder());
        assert!(!ImageSource::Bytes(vec![1, 2, 3]).is_placeholder());
        assert!(!ImageSource::Uri("ipfs://abc".to_string()).is_placeholder());
    }

    #[test]
    fn test_image_source_len() {
        assert_eq!(ImageSource::Bytes(vec![0; 16]).len(), 16);
        assert_eq!(ImageSource::Placeholder.len(), 0);
        assert!(ImageSource::Placeholder.is_empty());
    }
}
