pub mod image;
pub mod image_tag;
pub mod tag;
