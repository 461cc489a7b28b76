use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::UsernameQuery;
use crate::forms::user::CreateUserForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::user as user_service;

#[post("/users")]
pub async fn create_user(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateUserForm>,
) -> impl Responder {
    match user_service::create_user(form, repo.get_ref()) {
        Ok(user) => HttpResponse::Created().json(user),
        Err(err) => error_response(&err),
    }
}

#[get("/users")]
pub async fn get_user(
    repo: web::Data<DieselRepository>,
    query: web::Query<UsernameQuery>,
) -> impl Responder {
    match user_service::get_user_by_username(&query.username, repo.get_ref()) {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(err) => error_response(&err),
    }
}
