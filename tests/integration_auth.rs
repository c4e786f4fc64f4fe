mod common;

use axum::http::StatusCode;
use common::{TEST_USERNAME, get_auth_token, request, setup_test_app};
use serde_json::json;

#[tokio::test]
async fn test_login_returns_bearer_token() {
    let app = setup_test_app().await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": TEST_USERNAME, "password": "admin123" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["access_token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["token_type"], "bearer");
}

#[tokio::test]
async fn test_login_wrong_password_unauthorized() {
    let app = setup_test_app().await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": TEST_USERNAME, "password": "wrongpassword" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_login_unknown_username_unauthorized() {
    let app = setup_test_app().await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "nobody", "password": "admin123" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_resource_endpoints_require_token() {
    let app = setup_test_app().await;

    for uri in ["/api/classes", "/api/parents", "/api/students"] {
        let (status, _) = request(&app, "GET", uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} should be protected", uri);
    }
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = setup_test_app().await;

    let (status, _) = request(&app, "GET", "/api/parents", Some("not-a-jwt"), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_valid_token_grants_access() {
    let app = setup_test_app().await;
    let token = get_auth_token(&app).await;

    let (status, body) = request(&app, "GET", "/api/parents", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().is_some());
}

#[tokio::test]
async fn test_home_route_is_public() {
    let app = setup_test_app().await;

    let (status, body) = request(&app, "GET", "/", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "maktab");
}
