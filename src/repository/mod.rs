use crate::db::{DbConnection, DbPool};
use crate::domain::image::{Image, NewImage};
use crate::domain::image_tag::{AttachTags, ImageTag};
use crate::domain::tag::{NewTag, Tag};

pub mod errors;
pub mod image;
pub mod image_tag;
pub mod tag;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over image records.
pub trait ImageReader {
    fn list_images(&self) -> RepositoryResult<Vec<Image>>;
    fn get_image_by_id(&self, id: i32) -> RepositoryResult<Option<Image>>;
    fn get_image_by_url(&self, url: &str) -> RepositoryResult<Option<Image>>;
}

/// Write operations over image records.
pub trait ImageWriter {
    fn create_image(&self, new_image: &NewImage) -> RepositoryResult<Image>;
    /// Delete the image together with every link that references it.
    fn delete_image(&self, image_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over tag records.
pub trait TagReader {
    fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
    fn get_tag_by_name(&self, name: &str) -> RepositoryResult<Option<Tag>>;
}

/// Write operations over tag records.
pub trait TagWriter {
    fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
    /// Delete the tag together with every link that references it.
    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over image-tag links.
pub trait ImageTagReader {
    /// Tags linked to `image_id`, in the order the links were created.
    fn list_tags_for_image(&self, image_id: i32) -> RepositoryResult<Vec<Tag>>;
    fn get_image_tag(&self, image_id: i32, tag_id: i32) -> RepositoryResult<Option<ImageTag>>;
}

/// Write operations over image-tag links.
pub trait ImageTagWriter {
    /// Link every resolvable, not yet linked tag to the image in one transaction.
    ///
    /// Returns the newly linked tags in request order. Unknown tag ids and
    /// existing links are skipped. Fails with `NotFound` when the image is absent.
    fn attach_tags(&self, request: &AttachTags) -> RepositoryResult<Vec<Tag>>;
    fn delete_image_tag(&self, image_id: i32, tag_id: i32) -> RepositoryResult<()>;
}
