pub mod errors;
pub mod image_tags;
pub mod images;
pub mod tags;

pub use errors::{ServiceError, ServiceResult};
