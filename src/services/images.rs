use crate::domain::image::Image;
use crate::forms::images::AddImageForm;
use crate::repository::{ImageReader, ImageWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns every image in insertion order.
pub fn load_images<R>(repo: &R) -> ServiceResult<Vec<Image>>
where
    R: ImageReader + ?Sized,
{
    repo.list_images().map_err(ServiceError::from)
}

/// Returns a single image or `NotFound`.
pub fn load_image<R>(repo: &R, image_id: i32) -> ServiceResult<Image>
where
    R: ImageReader + ?Sized,
{
    repo.get_image_by_id(image_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a new image unless one with the same url is already stored.
pub fn create_image<R>(repo: &R, form: AddImageForm) -> ServiceResult<Image>
where
    R: ImageReader + ImageWriter + ?Sized,
{
    let new_image = form
        .into_new_image()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo
        .get_image_by_url(&new_image.url)
        .map_err(ServiceError::from)?
        .is_some()
    {
        return Err(ServiceError::Conflict);
    }

    repo.create_image(&new_image).map_err(ServiceError::from)
}

/// Deletes an image and its tag links.
pub fn remove_image<R>(repo: &R, image_id: i32) -> ServiceResult<()>
where
    R: ImageWriter + ?Sized,
{
    repo.delete_image(image_id).map_err(ServiceError::from)
}
