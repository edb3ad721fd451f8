use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, error, get, web};
use serde::{Deserialize, Serialize};

pub mod image_tags;
pub mod images;
pub mod tags;

/// JSON body used for confirmations and every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Build a `{"message": ...}` response with the given status.
pub fn message(status: StatusCode, text: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(MessageResponse::new(text))
}

pub(crate) fn internal_error() -> HttpResponse {
    message(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = message(StatusCode::BAD_REQUEST, err.to_string());
    error::InternalError::from_response(err, response).into()
}

/// Ids that do not fit the integer column can never match a row.
fn path_error_handler(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    let pattern = req.match_pattern().unwrap_or_default();
    let text = match pattern.as_str() {
        "/api/image-tags/{image_id}" => "No tags found for this image",
        "/api/image-tags/{image_id}/{tag_id}" => "Tag not found for this image",
        "/api/tags/{tag_id}" => "Tag not found",
        "/api/detail/{image_id}" | "/api/images/{image_id}" => "Image not found",
        _ => "Not found",
    };
    let response = message(StatusCode::NOT_FOUND, text);
    error::InternalError::from_response(err, response).into()
}

#[get("/")]
pub async fn show_index() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse::new("Welcome to the Wallpaper API"))
}

/// Register every endpoint of the catalog API.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(show_index)
        .service(images::list_images)
        .service(images::add_image)
        .service(images::show_image)
        .service(images::delete_image)
        .service(tags::list_tags)
        .service(tags::add_tag)
        .service(tags::delete_tag)
        .service(image_tags::show_image_tags)
        .service(image_tags::add_image_tags)
        .service(image_tags::delete_image_tag);
}
