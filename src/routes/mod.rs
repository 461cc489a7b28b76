//! HTTP handlers translating JSON requests into service calls.

use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod auth;
pub mod posts;
pub mod products;
pub mod users;

/// Maps a use-case failure to its HTTP status with a `{ "message" }` body.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(json!({ "message": "Not found" })),
        ServiceError::Unauthorized(message) => {
            HttpResponse::Unauthorized().json(json!({ "message": message }))
        }
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            HttpResponse::BadRequest().json(json!({ "message": message }))
        }
        ServiceError::Conflict(message) => {
            HttpResponse::Conflict().json(json!({ "message": message }))
        }
        ServiceError::Repository(_) | ServiceError::Internal(_) => {
            log::error!("Request failed: {err}");
            HttpResponse::InternalServerError().json(json!({ "message": "Internal server error" }))
        }
    }
}
