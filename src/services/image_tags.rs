use crate::domain::image_tag::ImageTags;
use crate::domain::tag::Tag;
use crate::forms::image_tags::AddImageTagsForm;
use crate::repository::{ImageTagReader, ImageTagWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns the tags linked to an image.
///
/// An image without links is reported as `NotFound`, the same as an unknown image.
pub fn load_image_tags<R>(repo: &R, image_id: i32) -> ServiceResult<ImageTags>
where
    R: ImageTagReader + ?Sized,
{
    let tags = repo
        .list_tags_for_image(image_id)
        .map_err(ServiceError::from)?;

    if tags.is_empty() {
        return Err(ServiceError::NotFound);
    }

    Ok(ImageTags { image_id, tags })
}

/// Links the requested tags to an image and returns only the newly linked ones.
///
/// Unknown tag ids and already linked tags are skipped silently. The call fails
/// with `NotFound` when the image does not exist and with `NoChanges` when
/// nothing new was linked.
pub fn attach_tags<R>(repo: &R, form: AddImageTagsForm) -> ServiceResult<Vec<Tag>>
where
    R: ImageTagWriter + ?Sized,
{
    let request = form
        .into_attach_tags()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let added = repo.attach_tags(&request).map_err(ServiceError::from)?;

    if added.is_empty() {
        return Err(ServiceError::NoChanges);
    }

    log::info!(
        "Linked {} tag(s) to image {}",
        added.len(),
        request.image_id
    );

    Ok(added)
}

/// Removes a single image-tag link.
pub fn detach_tag<R>(repo: &R, image_id: i32, tag_id: i32) -> ServiceResult<()>
where
    R: ImageTagReader + ImageTagWriter + ?Sized,
{
    if repo
        .get_image_tag(image_id, tag_id)
        .map_err(ServiceError::from)?
        .is_none()
    {
        return Err(ServiceError::NotFound);
    }

    repo.delete_image_tag(image_id, tag_id)
        .map_err(ServiceError::from)
}
