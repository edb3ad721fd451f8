use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a wallpaper catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Image {
    /// Unique identifier of the image.
    pub id: i32,
    /// Location of the wallpaper.
    pub url: String,
    /// Timestamp for when the image record was created.
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewImage {
    /// Location of the wallpaper.
    pub url: String,
}

impl NewImage {
    /// Construct a new image payload with a trimmed url.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into().trim().to_string();
        Self { url }
    }
}
