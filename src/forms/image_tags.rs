use serde::Deserialize;
use thiserror::Error;

use crate::domain::image_tag::AttachTags;

/// Result type returned by the image-tag form helpers.
pub type ImageTagFormResult<T> = Result<T, ImageTagFormError>;

/// Errors that can occur while processing image-tag payloads.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageTagFormError {
    #[error("Image ID is required")]
    MissingImageId,
    #[error("Tag IDs are required")]
    MissingTagIds,
}

/// JSON payload accepted when linking tags to an image.
#[derive(Debug, Default, Deserialize)]
pub struct AddImageTagsForm {
    pub image_id: Option<i32>,
    pub tag_ids: Option<Vec<i32>>,
}

impl AddImageTagsForm {
    /// Checks that both identifiers are present and builds the link request.
    ///
    /// Duplicate tag ids are passed through untouched.
    pub fn into_attach_tags(self) -> ImageTagFormResult<AttachTags> {
        let image_id = self.image_id.ok_or(ImageTagFormError::MissingImageId)?;

        let tag_ids = match self.tag_ids {
            Some(tag_ids) if !tag_ids.is_empty() => tag_ids,
            _ => return Err(ImageTagFormError::MissingTagIds),
        };

        Ok(AttachTags { image_id, tag_ids })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_image_tags_form_keeps_order_and_duplicates() {
        let form = AddImageTagsForm {
            image_id: Some(4),
            tag_ids: Some(vec![3, 1, 3]),
        };

        let request = form.into_attach_tags().expect("expected conversion to succeed");

        assert_eq!(request.image_id, 4);
        assert_eq!(request.tag_ids, vec![3, 1, 3]);
    }

    #[test]
    fn add_image_tags_form_requires_image_id() {
        let form = AddImageTagsForm {
            image_id: None,
            tag_ids: Some(vec![1]),
        };

        assert_eq!(
            form.into_attach_tags(),
            Err(ImageTagFormError::MissingImageId)
        );
    }

    #[test]
    fn add_image_tags_form_requires_tag_ids() {
        let missing = AddImageTagsForm {
            image_id: Some(1),
            tag_ids: None,
        };
        let empty = AddImageTagsForm {
            image_id: Some(1),
            tag_ids: Some(Vec::new()),
        };

        assert_eq!(
            missing.into_attach_tags(),
            Err(ImageTagFormError::MissingTagIds)
        );
        assert_eq!(
            empty.into_attach_tags(),
            Err(ImageTagFormError::MissingTagIds)
        );
    }
}
