use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{App, test, web};
use content_api::models::auth::ACCESS_TOKEN_COOKIE;
use content_api::models::config::ServerConfig;
use content_api::repository::DieselRepository;
use serde_json::{Value, json};

mod common;

fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        secret: "route-test-secret".to_string(),
        jwt_expires_in: 3600,
        secure_cookies: false,
        cors_origins: vec!["http://localhost:7000".to_string()],
    }
}

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DieselRepository::new($test_db.pool())))
                .app_data(web::Data::new(server_config()))
                .configure(content_api::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_login_and_post_lifecycle() {
    let test_db = common::TestDb::new("test_login_and_post_lifecycle.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "username": "john", "email": "john@example.com", "password": "hunter2" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: Value = test::read_body_json(resp).await;
    assert_eq!(user["username"], "john");
    assert!(user.get("password").is_none());

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "username": "john", "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "username": "john", "password": "hunter2" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == ACCESS_TOKEN_COOKIE)
        .expect("access token cookie");
    assert_eq!(cookie.http_only(), Some(true));
    let body: Value = test::read_body_json(resp).await;
    let token = body["accessToken"].as_str().expect("token").to_string();
    let bearer = (AUTHORIZATION, format!("Bearer {token}"));

    let req = test::TestRequest::get().uri("/posts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/posts")
        .insert_header(bearer.clone())
        .set_json(json!({ "title": "Hello", "body": "World" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let post: Value = test::read_body_json(resp).await;
    let post_id = post["uuid"].as_str().expect("uuid").to_string();
    assert!(post.get("createdAt").is_some());

    let req = test::TestRequest::put()
        .uri(&format!("/posts/{post_id}"))
        .insert_header(bearer.clone())
        .set_json(json!({ "body": "Everyone" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let post: Value = test::read_body_json(resp).await;
    assert_eq!(post["title"], "Hello");
    assert_eq!(post["body"], "Everyone");

    let req = test::TestRequest::get()
        .uri("/posts?search=every")
        .insert_header(bearer.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let list: Value = test::read_body_json(resp).await;
    assert_eq!(list["meta"], json!({ "page": 1, "limit": 10, "total": 1 }));

    let req = test::TestRequest::get()
        .uri("/posts/not-a-uuid")
        .insert_header(bearer.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::delete()
        .uri(&format!("/posts/{post_id}"))
        .insert_header(bearer.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete()
        .uri(&format!("/posts/{post_id}"))
        .insert_header(bearer)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_cookie_token_is_accepted() {
    let test_db = common::TestDb::new("test_cookie_token_is_accepted.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "username": "jane", "email": "jane@example.com", "password": "pw" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "username": "jane", "password": "pw" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == ACCESS_TOKEN_COOKIE)
        .expect("access token cookie")
        .into_owned();

    let req = test::TestRequest::get()
        .uri("/posts")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_duplicate_username_conflicts() {
    let test_db = common::TestDb::new("test_duplicate_username_conflicts.db");
    let app = init_app!(test_db);

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "username": "sam", "email": "sam@example.com", "password": "pw" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), expected);
    }

    let req = test::TestRequest::get().uri("/users?username=sam").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/users?username=nobody").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_products_are_public_and_paginated() {
    let test_db = common::TestDb::new("test_products_are_public_and_paginated.db");
    let app = init_app!(test_db);

    for (name, price) in [("Chair", 30.0), ("Desk", 10.0), ("Lamp", 20.0)] {
        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(json!({ "name": name, "price": price }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let product: Value = test::read_body_json(resp).await;
        assert_eq!(product["status"], "active");
    }

    let req = test::TestRequest::get()
        .uri("/products?sort=price&order=ASC&page=1&limit=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let list: Value = test::read_body_json(resp).await;
    assert_eq!(list["meta"], json!({ "page": 1, "limit": 2, "total": 3 }));
    let names: Vec<&str> = list["result"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Desk", "Lamp"]);

    let req = test::TestRequest::get()
        .uri("/products?limit=-1&search=a")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let list: Value = test::read_body_json(resp).await;
    // "Chair" and "Lamp" contain an "a"; "Desk" does not.
    assert_eq!(list["meta"], json!({ "page": 1, "limit": -1, "total": 2 }));
    assert_eq!(list["result"].as_array().unwrap().len(), 2);

    let req = test::TestRequest::get()
        .uri("/products/00000000-0000-4000-8000-000000000000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({ "name": "", "price": 1.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
