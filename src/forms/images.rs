use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::image::NewImage;

/// Maximum allowed length for an image url.
const URL_MAX_LEN: u64 = 255;

/// Result type returned by the image form helpers.
pub type ImageFormResult<T> = Result<T, ImageFormError>;

/// Errors that can occur while processing image payloads.
#[derive(Debug, Error)]
pub enum ImageFormError {
    /// Validation failures from the `validator` crate.
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    /// The url is absent or blank.
    #[error("Image URL cannot be blank")]
    MissingUrl,
}

/// JSON payload accepted by the "add image" endpoints.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddImageForm {
    #[validate(length(max = URL_MAX_LEN, message = "Image URL must be at most 255 characters"))]
    pub url: Option<String>,
}

impl AddImageForm {
    /// Validates the payload into a domain `NewImage`.
    pub fn into_new_image(self) -> ImageFormResult<NewImage> {
        let url = self.url.as_deref().map(str::trim).unwrap_or_default();
        if url.is_empty() {
            return Err(ImageFormError::MissingUrl);
        }

        let trimmed = Self {
            url: Some(url.to_string()),
        };
        trimmed.validate()?;

        Ok(NewImage::new(url))
    }
}
