use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, post, web};
use serde::Serialize;

use crate::domain::tag::Tag;
use crate::forms::image_tags::AddImageTagsForm;
use crate::repository::DieselRepository;
use crate::routes::{internal_error, message};
use crate::services::{ServiceError, image_tags as image_tags_service};

/// Body returned after linking tags to an image.
#[derive(Debug, Serialize)]
pub struct TagsAddedResponse {
    pub message: &'static str,
    /// Only the tags linked by this request.
    pub tags: Vec<Tag>,
}

#[get("/api/image-tags/{image_id}")]
pub async fn show_image_tags(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let image_id = path.into_inner();

    match image_tags_service::load_image_tags(repo.get_ref(), image_id) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(ServiceError::NotFound) => {
            message(StatusCode::NOT_FOUND, "No tags found for this image")
        }
        Err(err) => {
            log::error!("Failed to list tags for image {image_id}: {err}");
            internal_error()
        }
    }
}

#[post("/api/image-tags")]
pub async fn add_image_tags(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddImageTagsForm>,
) -> impl Responder {
    match image_tags_service::attach_tags(repo.get_ref(), form) {
        Ok(tags) => HttpResponse::Created().json(TagsAddedResponse {
            message: "Tags added successfully",
            tags,
        }),
        Err(ServiceError::Form(text)) => message(StatusCode::BAD_REQUEST, text),
        Err(ServiceError::NotFound) => message(StatusCode::NOT_FOUND, "Image not found"),
        Err(ServiceError::NoChanges) => message(StatusCode::BAD_REQUEST, "No new tags were added"),
        // The link was written concurrently by another request.
        Err(ServiceError::Conflict) => message(StatusCode::BAD_REQUEST, "No new tags were added"),
        Err(err) => {
            log::error!("Failed to link tags: {err}");
            internal_error()
        }
    }
}

#[delete("/api/image-tags/{image_id}/{tag_id}")]
pub async fn delete_image_tag(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (image_id, tag_id) = path.into_inner();

    match image_tags_service::detach_tag(repo.get_ref(), image_id, tag_id) {
        Ok(()) => message(StatusCode::OK, "Tag removed from image"),
        Err(ServiceError::NotFound) => {
            message(StatusCode::NOT_FOUND, "Tag not found for this image")
        }
        Err(err) => {
            log::error!("Failed to unlink tag {tag_id} from image {image_id}: {err}");
            internal_error()
        }
    }
}
