use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use maktab::config::cors::CorsConfig;
use maktab::config::credentials::Credentials;
use maktab::config::jwt::JwtConfig;
use maktab::router::init_router;
use maktab::state::AppState;

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "admin123";

/// Fresh in-memory database per test. A single connection keeps every query
/// on the same in-memory instance.
pub async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn test_state(pool: SqlitePool) -> AppState {
    AppState {
        db: pool,
        jwt_config: JwtConfig {
            secret: "test_secret_key_for_testing_purposes".to_string(),
            access_token_expiry: 3600,
        },
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        credentials: Credentials::new(TEST_USERNAME, TEST_PASSWORD),
    }
}

pub async fn setup_test_app() -> Router {
    let pool = setup_pool().await;
    init_router(test_state(pool))
}

/// Sends a request and returns the status plus the parsed JSON body
/// (`Value::Null` for empty bodies such as 204 responses).
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, body)
}

pub async fn get_auth_token(app: &Router) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": TEST_USERNAME, "password": TEST_PASSWORD })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["access_token"].as_str().unwrap().to_string()
}

#[allow(dead_code)]
pub async fn create_parent(app: &Router, token: &str, name: &str, phone_number: &str) -> i64 {
    let (status, body) = request(
        app,
        "POST",
        "/api/parents",
        Some(token),
        Some(json!({ "name": name, "phone_number": phone_number })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "parent create failed: {}", body);
    body["id"].as_i64().unwrap()
}

#[allow(dead_code)]
pub async fn create_class(app: &Router, token: &str, name: &str, teacher_name: &str) -> i64 {
    let (status, body) = request(
        app,
        "POST",
        "/api/classes",
        Some(token),
        Some(json!({ "name": name, "teacher_name": teacher_name })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "class create failed: {}", body);
    body["id"].as_i64().unwrap()
}

#[allow(dead_code)]
pub async fn create_student(
    app: &Router,
    token: &str,
    name: &str,
    parent_id: Option<i64>,
    class_id: Option<i64>,
) -> i64 {
    let (status, body) = request(
        app,
        "POST",
        "/api/students",
        Some(token),
        Some(json!({
            "name": name,
            "age": 12,
            "grade": 6,
            "parent_id": parent_id,
            "class_id": class_id
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "student create failed: {}", body);
    body["id"].as_i64().unwrap()
}
