use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, post, routes, web};

use crate::forms::images::AddImageForm;
use crate::repository::DieselRepository;
use crate::routes::{internal_error, message};
use crate::services::{ServiceError, images as images_service};

#[get("/api/images")]
pub async fn list_images(repo: web::Data<DieselRepository>) -> impl Responder {
    match images_service::load_images(repo.get_ref()) {
        Ok(images) => HttpResponse::Ok().json(images),
        Err(err) => {
            log::error!("Failed to list images: {err}");
            internal_error()
        }
    }
}

#[routes]
#[post("/api/images")]
#[post("/api/images/upload")]
pub async fn add_image(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddImageForm>,
) -> impl Responder {
    match images_service::create_image(repo.get_ref(), form) {
        Ok(image) => HttpResponse::Created().json(image),
        Err(ServiceError::Form(text)) => message(StatusCode::BAD_REQUEST, text),
        Err(ServiceError::Conflict) => message(StatusCode::BAD_REQUEST, "Image already exists."),
        Err(err) => {
            log::error!("Failed to create image: {err}");
            internal_error()
        }
    }
}

#[get("/api/detail/{image_id}")]
pub async fn show_image(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let image_id = path.into_inner();

    match images_service::load_image(repo.get_ref(), image_id) {
        Ok(image) => HttpResponse::Ok().json(image),
        Err(ServiceError::NotFound) => message(StatusCode::NOT_FOUND, "Image not found"),
        Err(err) => {
            log::error!("Failed to load image {image_id}: {err}");
            internal_error()
        }
    }
}

#[delete("/api/images/{image_id}")]
pub async fn delete_image(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let image_id = path.into_inner();

    match images_service::remove_image(repo.get_ref(), image_id) {
        Ok(()) => message(StatusCode::OK, "Image deleted successfully"),
        Err(ServiceError::NotFound) => message(StatusCode::NOT_FOUND, "Image not found"),
        Err(err) => {
            log::error!("Failed to delete image {image_id}: {err}");
            internal_error()
        }
    }
}
