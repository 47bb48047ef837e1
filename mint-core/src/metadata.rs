//! Token Metadata Document
//!
//! The JSON document uploaded to the content store next to the image. The
//! `image` field must carry the exact URI returned by the prior image
//! upload; marketplaces resolve the asset through it.

use serde::{Deserialize, Serialize};

/// NFT metadata document `{name, description, image}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// NFT display name
    pub name: String,
    /// NFT description
    pub description: String,
    /// Retrieval URI of the uploaded image asset
    pub image: String,
}

impl TokenMetadata {
    /// Build the document for an uploaded image
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image_uri: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image: image_uri.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let meta = TokenMetadata::new("Pixel Cat", "An 8x8 cat", "https://gw/ipfs/Qmcat");
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["name"], "Pixel Cat");
        assert_eq!(json["description"], "An 8x8 cat");
        assert_eq!(json["image"], "https://gw/ipfs/Qmcat");
        assert_eq!(json.as_object().unwrap().len(), 3);
    }
}
