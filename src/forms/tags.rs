use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::tag::NewTag;
use crate::forms::sanitize_inline_text;

/// Maximum allowed length for a tag name.
const NAME_MAX_LEN: u64 = 100;

/// Result type returned by the tag form helpers.
pub type TagFormResult<T> = Result<T, TagFormError>;

/// Errors that can occur while processing tag payloads.
#[derive(Debug, Error)]
pub enum TagFormError {
    /// Validation failures from the `validator` crate.
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is absent or empty after sanitization.
    #[error("Tag Name cannot be blank")]
    EmptyName,
}

/// JSON payload accepted by the "add tag" endpoint.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddTagForm {
    #[validate(length(max = NAME_MAX_LEN, message = "Tag Name must be at most 100 characters"))]
    pub name: Option<String>,
}

impl AddTagForm {
    /// Validates and sanitizes the payload into a domain `NewTag`.
    pub fn into_new_tag(self) -> TagFormResult<NewTag> {
        let sanitized_name = self
            .name
            .as_deref()
            .map(sanitize_inline_text)
            .unwrap_or_default();
        if sanitized_name.is_empty() {
            return Err(TagFormError::EmptyName);
        }

        let sanitized = Self {
            name: Some(sanitized_name),
        };
        sanitized.validate()?;

        Ok(NewTag::new(sanitized.name.unwrap_or_default()))
    }
}
