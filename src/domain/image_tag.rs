use serde::{Deserialize, Serialize};

use crate::domain::tag::Tag;

/// Domain representation linking an image to a tag record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ImageTag {
    /// Unique identifier of the image-tag association.
    pub id: i32,
    /// Identifier of the image the tag is attached to.
    pub image_id: i32,
    /// Identifier of the referenced tag record.
    pub tag_id: i32,
}

/// Payload required to associate an existing tag with an image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NewImageTag {
    pub image_id: i32,
    pub tag_id: i32,
}

impl NewImageTag {
    /// Construct a new association payload between an image and a tag.
    pub fn new(image_id: i32, tag_id: i32) -> Self {
        Self { image_id, tag_id }
    }
}

/// Request to link a batch of tags to a single image.
///
/// `tag_ids` keeps the caller's order and may contain duplicates or ids of
/// tags that do not exist; both are skipped when the links are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachTags {
    pub image_id: i32,
    pub tag_ids: Vec<i32>,
}

/// Tags currently linked to an image.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ImageTags {
    pub image_id: i32,
    pub tags: Vec<Tag>,
}
