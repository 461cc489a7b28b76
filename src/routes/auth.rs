use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::{HttpResponse, Responder, post, web};

use crate::forms::auth::LoginForm;
use crate::models::auth::ACCESS_TOKEN_COOKIE;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::auth as auth_service;

#[post("/auth/login")]
pub async fn login(
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Json(form): web::Json<LoginForm>,
) -> impl Responder {
    match auth_service::login(
        form,
        &server_config.secret,
        server_config.jwt_expires_in,
        repo.get_ref(),
    ) {
        Ok(token) => {
            let cookie = Cookie::build(ACCESS_TOKEN_COOKIE, token.access_token.clone())
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .secure(server_config.secure_cookies)
                .max_age(Duration::days(1))
                .finish();
            HttpResponse::Ok().cookie(cookie).json(token)
        }
        Err(err) => error_response(&err),
    }
}
