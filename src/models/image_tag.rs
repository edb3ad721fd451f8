use diesel::prelude::*;

use crate::domain::image_tag::{ImageTag as DomainImageTag, NewImageTag as DomainNewImageTag};

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::image_tags,
    belongs_to(super::image::Image, foreign_key = image_id),
    belongs_to(super::tag::Tag, foreign_key = tag_id)
)]
pub struct ImageTag {
    pub id: i32,
    pub image_id: i32,
    pub tag_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::image_tags)]
pub struct NewImageTag {
    pub image_id: i32,
    pub tag_id: i32,
}

impl From<ImageTag> for DomainImageTag {
    fn from(value: ImageTag) -> Self {
        Self {
            id: value.id,
            image_id: value.image_id,
            tag_id: value.tag_id,
        }
    }
}

impl From<&DomainNewImageTag> for NewImageTag {
    fn from(value: &DomainNewImageTag) -> Self {
        Self {
            image_id: value.image_id,
            tag_id: value.tag_id,
        }
    }
}
