mod common;

use axum::http::StatusCode;
use common::{create_class, create_parent, create_student, get_auth_token, request, setup_test_app};
use serde_json::json;

#[tokio::test]
async fn test_create_student_with_references() {
    let app = setup_test_app().await;
    let token = get_auth_token(&app).await;

    let parent_id = create_parent(&app, &token, "Dad", "09121110001").await;
    let class_id = create_class(&app, &token, "Physics", "Dr. X").await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/students",
        Some(&token),
        Some(json!({
            "name": "Albert",
            "age": 15,
            "grade": 9,
            "parent_id": parent_id,
            "class_id": class_id
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Albert");
    assert_eq!(body["parent_id"], parent_id);
    assert_eq!(body["class_id"], class_id);
}

#[tokio::test]
async fn test_create_student_without_references() {
    let app = setup_test_app().await;
    let token = get_auth_token(&app).await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/students",
        Some(&token),
        Some(json!({ "name": "Loner", "age": 10, "grade": 4 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["parent_id"].is_null());
    assert!(body["class_id"].is_null());
}

#[tokio::test]
async fn test_create_student_with_deleted_parent_rejected() {
    let app = setup_test_app().await;
    let token = get_auth_token(&app).await;

    let parent_id = create_parent(&app, &token, "Gone", "09121110002").await;
    request(&app, "DELETE", &format!("/api/parents/{}", parent_id), Some(&token), None).await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/students",
        Some(&token),
        Some(json!({ "name": "Orphan", "age": 10, "grade": 4, "parent_id": parent_id })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Parent"));

    // No row was created.
    let (_, body) = request(&app, "GET", "/api/students", Some(&token), None).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_student_with_unknown_class_rejected() {
    let app = setup_test_app().await;
    let token = get_auth_token(&app).await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/students",
        Some(&token),
        Some(json!({ "name": "Lost", "age": 10, "grade": 4, "class_id": 777 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Class"));
}

#[tokio::test]
async fn test_age_out_of_range_rejected() {
    let app = setup_test_app().await;
    let token = get_auth_token(&app).await;

    for age in [3, 5, 19] {
        let (status, _) = request(
            &app,
            "POST",
            "/api/students",
            Some(&token),
            Some(json!({ "name": "Kid", "age": age, "grade": 4 })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "age {} should fail", age);
    }
}

#[tokio::test]
async fn test_grade_out_of_range_rejected() {
    let app = setup_test_app().await;
    let token = get_auth_token(&app).await;

    for grade in [0, 13] {
        let (status, _) = request(
            &app,
            "POST",
            "/api/students",
            Some(&token),
            Some(json!({ "name": "Kid", "age": 10, "grade": grade })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "grade {} should fail", grade);
    }
}

#[tokio::test]
async fn test_patch_reassigning_to_deleted_class_rejected() {
    let app = setup_test_app().await;
    let token = get_auth_token(&app).await;

    let class_id = create_class(&app, &token, "Doomed", "Mr. Y").await;
    let student_id = create_student(&app, &token, "Mover", None, None).await;

    request(&app, "DELETE", &format!("/api/classes/{}", class_id), Some(&token), None).await;

    let (status, _) = request(
        &app,
        "PATCH",
        &format!("/api/students/{}", student_id),
        Some(&token),
        Some(json!({ "class_id": class_id })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_untouched_reference_is_not_revalidated() {
    let app = setup_test_app().await;
    let token = get_auth_token(&app).await;

    let parent_id = create_parent(&app, &token, "Dad", "09121110003").await;
    let student_id = create_student(&app, &token, "Child", Some(parent_id), None).await;

    // Deleting the parent cascades onto the student; restore only the student's
    // name path by bringing both back first.
    request(&app, "DELETE", &format!("/api/parents/{}", parent_id), Some(&token), None).await;
    request(&app, "POST", &format!("/api/parents/{}/restore", parent_id), Some(&token), None).await;

    // A rename that does not touch parent_id goes through without re-checking it.
    let (status, body) = request(
        &app,
        "PATCH",
        &format!("/api/students/{}", student_id),
        Some(&token),
        Some(json!({ "name": "Renamed" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Renamed");
    assert_eq!(body["parent_id"], parent_id);
}

#[tokio::test]
async fn test_patch_null_detaches_parent() {
    let app = setup_test_app().await;
    let token = get_auth_token(&app).await;

    let parent_id = create_parent(&app, &token, "Dad", "09121110004").await;
    let student_id = create_student(&app, &token, "Child", Some(parent_id), None).await;

    let (status, body) = request(
        &app,
        "PATCH",
        &format!("/api/students/{}", student_id),
        Some(&token),
        Some(json!({ "parent_id": null })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["parent_id"].is_null());
}

#[tokio::test]
async fn test_put_requires_all_mandatory_fields() {
    let app = setup_test_app().await;
    let token = get_auth_token(&app).await;

    let student_id = create_student(&app, &token, "Child", None, None).await;

    let (status, body) = request(
        &app,
        "PUT",
        &format!("/api/students/{}", student_id),
        Some(&token),
        Some(json!({ "name": "Renamed", "age": 11 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("grade"));
}

#[tokio::test]
async fn test_put_with_all_fields_succeeds() {
    let app = setup_test_app().await;
    let token = get_auth_token(&app).await;

    let class_id = create_class(&app, &token, "Biology", "Dr. Z").await;
    let student_id = create_student(&app, &token, "Child", None, None).await;

    let (status, body) = request(
        &app,
        "PUT",
        &format!("/api/students/{}", student_id),
        Some(&token),
        Some(json!({
            "name": "Grown",
            "age": 16,
            "grade": 10,
            "parent_id": null,
            "class_id": class_id
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Grown");
    assert_eq!(body["age"], 16);
    assert_eq!(body["grade"], 10);
    assert_eq!(body["class_id"], class_id);
}
