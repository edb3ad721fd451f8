use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::forms::tags::AddTagForm;
use crate::repository::DieselRepository;
use crate::routes::{internal_error, message};
use crate::services::{ServiceError, tags as tags_service};

#[get("/api/tags")]
pub async fn list_tags(repo: web::Data<DieselRepository>) -> impl Responder {
    match tags_service::load_tags(repo.get_ref()) {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(err) => {
            log::error!("Failed to list tags: {err}");
            internal_error()
        }
    }
}

#[post("/api/tags")]
pub async fn add_tag(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddTagForm>,
) -> impl Responder {
    match tags_service::create_tag(repo.get_ref(), form) {
        Ok(tag) => HttpResponse::Created().json(tag),
        Err(ServiceError::Form(text)) => message(StatusCode::BAD_REQUEST, text),
        Err(ServiceError::Conflict) => message(StatusCode::BAD_REQUEST, "Tag already exists."),
        Err(err) => {
            log::error!("Failed to create tag: {err}");
            internal_error()
        }
    }
}

#[delete("/api/tags/{tag_id}")]
pub async fn delete_tag(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    let tag_id = path.into_inner();

    match tags_service::remove_tag(repo.get_ref(), tag_id) {
        Ok(()) => message(StatusCode::OK, "Tag deleted successfully"),
        Err(ServiceError::NotFound) => message(StatusCode::NOT_FOUND, "Tag not found"),
        Err(err) => {
            log::error!("Failed to delete tag {tag_id}: {err}");
            internal_error()
        }
    }
}
