//! Post endpoints. Every handler requires a valid access token.

use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::post::{CreatePostForm, UpdatePostForm};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::ListParams;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::post as post_service;

#[get("/posts")]
pub async fn list_posts(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<ListParams>,
) -> impl Responder {
    match post_service::list_posts(&params, repo.get_ref()) {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(err) => error_response(&err),
    }
}

#[get("/posts/{id}")]
pub async fn get_post(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    id: web::Path<String>,
) -> impl Responder {
    match post_service::get_post_by_id(&id, repo.get_ref()) {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(err) => error_response(&err),
    }
}

#[post("/posts")]
pub async fn create_post(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreatePostForm>,
) -> impl Responder {
    match post_service::create_post(form, repo.get_ref()) {
        Ok(post) => {
            log::info!("Post {} created by {}", post.uuid, user.username);
            HttpResponse::Created().json(post)
        }
        Err(err) => error_response(&err),
    }
}

#[put("/posts/{id}")]
pub async fn update_post(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    id: web::Path<String>,
    web::Json(form): web::Json<UpdatePostForm>,
) -> impl Responder {
    match post_service::update_post_by_id(&id, form, repo.get_ref()) {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(err) => error_response(&err),
    }
}

#[delete("/posts/{id}")]
pub async fn delete_post(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    id: web::Path<String>,
) -> impl Responder {
    match post_service::delete_post_by_id(&id, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(&err),
    }
}
