use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::image::{Image as DomainImage, NewImage as DomainNewImage};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::images)]
pub struct Image {
    pub id: i32,
    pub url: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::images)]
pub struct NewImage<'a> {
    pub url: &'a str,
}

impl From<Image> for DomainImage {
    fn from(value: Image) -> Self {
        Self {
            id: value.id,
            url: value.url,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewImage> for NewImage<'a> {
    fn from(value: &'a DomainNewImage) -> Self {
        Self {
            url: value.url.as_str(),
        }
    }
}
