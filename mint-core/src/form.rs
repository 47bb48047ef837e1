//! Mint Form Controller
//!
//! Owns the user-entered fields and gates submission: `is_complete` requires
//! all three text fields to be non-blank after trimming, and `validate`
//! additionally checks the price parses as a positive decimal. Rejection
//! never touches pipeline state; the caller surfaces the error as a
//! notification and leaves the flow where it was.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{MintError, MintResult};
use crate::types::{ImageSource, MintRequest};

/// Form state for one mint flow
#[derive(Debug, Clone, Default)]
pub struct MintForm {
    name: String,
    description: String,
    price: String,
    image: ImageSource,
}

impl MintForm {
    /// Create an empty form with the no-drawing placeholder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name field
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the description field
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Set the price field (decimal-as-string)
    pub fn set_price(&mut self, price: impl Into<String>) {
        self.price = price.into();
    }

    /// Set the image source
    pub fn set_image(&mut self, image: ImageSource) {
        self.image = image;
    }

    /// Current image source
    pub fn image(&self) -> &ImageSource {
        &self.image
    }

    /// All three text fields are non-blank after trimming
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.description.trim().is_empty()
            && !self.price.trim().is_empty()
    }

    /// Validate the form and build the request the pipeline consumes
    ///
    /// Reports the first offending field. The image source is carried
    /// through untouched; the placeholder sentinel is the pipeline's
    /// short-circuit, not a validation failure.
    pub fn validate(&self) -> MintResult<MintRequest> {
        if self.name.trim().is_empty() {
            return Err(MintError::IncompleteField { field: "name" });
        }
        if self.description.trim().is_empty() {
            return Err(MintError::IncompleteField { field: "description" });
        }
        let price = self.price.trim();
        if price.is_empty() {
            return Err(MintError::IncompleteField { field: "price" });
        }
        match Decimal::from_str(price) {
            Ok(value) if value > Decimal::ZERO => {}
            _ => {
                return Err(MintError::InvalidPrice {
                    value: price.to_string(),
                })
            }
        }

        Ok(MintRequest {
            image: self.image.clone(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: price.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> MintForm {
        let mut form = MintForm::new();
        form.set_name("Pixel Cat");
        form.set_description("An 8x8 cat");
        form.set_price("0.05");
        form.set_image(ImageSource::Bytes(vec![1, 2, 3]));
        form
    }

    #[test]
    fn test_complete_form() {
        assert!(filled_form().is_complete());
    }

    #[test]
    fn test_blank_fields_are_incomplete() {
        for blank in ["", "   ", "\t\n"] {
            let mut form = filled_form();
            form.set_name(blank);
            assert!(!form.is_complete());

            let mut form = filled_form();
            form.set_description(blank);
            assert!(!form.is_complete());

            let mut form = filled_form();
            form.set_price(blank);
            assert!(!form.is_complete());
        }
    }

    #[test]
    fn test_validate_reports_first_blank_field() {
        let mut form = filled_form();
        form.set_name("  ");
        let err = form.validate().unwrap_err();
        assert!(matches!(err, MintError::IncompleteField { field: "name" }));
    }

    #[test]
    fn test_validate_rejects_non_positive_price() {
        for bad in ["0", "-0.5", "free", "1.2.3"] {
            let mut form = filled_form();
            form.set_price(bad);
            assert!(
                matches!(form.validate(), Err(MintError::InvalidPrice { .. })),
                "price {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_validate_trims_fields() {
        let mut form = filled_form();
        form.set_name("  Pixel Cat  ");
        form.set_price(" 0.05 ");
        let request = form.validate().unwrap();
        assert_eq!(request.name, "Pixel Cat");
        assert_eq!(request.price, "0.05");
    }

    #[test]
    fn test_placeholder_image_passes_validation() {
        let mut form = filled_form();
        form.set_image(ImageSource::Placeholder);
        let request = form.validate().unwrap();
        assert!(request.image.is_placeholder());
    }
}
