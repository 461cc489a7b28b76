use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::product::{CreateProductForm, UpdateProductForm};
use crate::pagination::ListParams;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::product as product_service;

#[get("/products")]
pub async fn list_products(
    repo: web::Data<DieselRepository>,
    params: web::Query<ListParams>,
) -> impl Responder {
    match product_service::list_products(&params, repo.get_ref()) {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(err) => error_response(&err),
    }
}

#[get("/products/{id}")]
pub async fn get_product(
    repo: web::Data<DieselRepository>,
    id: web::Path<String>,
) -> impl Responder {
    match product_service::get_product_by_id(&id, repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(&err),
    }
}

#[post("/products")]
pub async fn create_product(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateProductForm>,
) -> impl Responder {
    match product_service::create_product(form, repo.get_ref()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(err) => error_response(&err),
    }
}

#[put("/products/{id}")]
pub async fn update_product(
    repo: web::Data<DieselRepository>,
    id: web::Path<String>,
    web::Json(form): web::Json<UpdateProductForm>,
) -> impl Responder {
    match product_service::update_product_by_id(&id, form, repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(&err),
    }
}

#[delete("/products/{id}")]
pub async fn delete_product(
    repo: web::Data<DieselRepository>,
    id: web::Path<String>,
) -> impl Responder {
    match product_service::delete_product_by_id(&id, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(&err),
    }
}
