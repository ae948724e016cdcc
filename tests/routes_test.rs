// ABOUTME: HTTP-level integration tests for the Rollcall API routes
// ABOUTME: Drives the axum router with oneshot requests and checks statuses and shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use common::{build_test_app, register_students};
use serde_json::{json, Value};
use tower::ServiceExt;

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn test_register_returns_success_message() {
    let (app, _resources) = build_test_app().await.expect("app");

    let request = json_request(
        "POST",
        "/api/register",
        &json!({
            "teacher": "teacherken@gmail.com",
            "students": ["studentjon@gmail.com", "studenthon@gmail.com"]
        }),
    );

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["message"], "success");
}

#[tokio::test]
async fn test_register_without_teacher_is_bad_request() {
    let (app, _resources) = build_test_app().await.expect("app");

    let request = json_request(
        "POST",
        "/api/register",
        &json!({ "students": ["studentjon@gmail.com"] }),
    );

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["code"], "MISSING_REQUIRED_FIELD");
    assert_eq!(body["message"], "teacher is required");
}

#[tokio::test]
async fn test_common_students_shape() {
    let (app, resources) = build_test_app().await.expect("app");
    register_students(
        &resources.database,
        "teacherken@gmail.com",
        &["studentjon@gmail.com", "studenthon@gmail.com"],
    )
    .await
    .expect("seed");

    let request = Request::builder()
        .uri("/api/commonstudents?teachers=teacherken@gmail.com")
        .body(Body::empty())
        .expect("request builds");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["message"], "success");
    let mut students: Vec<String> = body["students"]
        .as_array()
        .expect("students array")
        .iter()
        .map(|v| v.as_str().expect("string").to_owned())
        .collect();
    students.sort();
    assert_eq!(
        students,
        vec!["studenthon@gmail.com", "studentjon@gmail.com"]
    );
}

#[tokio::test]
async fn test_common_students_without_query_is_empty() {
    let (app, _resources) = build_test_app().await.expect("app");

    let request = Request::builder()
        .uri("/api/commonstudents")
        .body(Body::empty())
        .expect("request builds");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["students"], json!([]));
}

#[tokio::test]
async fn test_suspend_known_and_unknown_student() {
    let (app, resources) = build_test_app().await.expect("app");
    register_students(
        &resources.database,
        "teacherken@gmail.com",
        &["studenthon@gmail.com"],
    )
    .await
    .expect("seed");

    let request = json_request(
        "POST",
        "/api/suspend",
        &json!({ "student": "studenthon@gmail.com" }),
    );
    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "success");

    let request = json_request(
        "POST",
        "/api/suspend",
        &json!({ "student": "ghost@gmail.com" }),
    );
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_retrieve_for_notifications_shape() {
    let (app, resources) = build_test_app().await.expect("app");
    register_students(
        &resources.database,
        "teacherken@gmail.com",
        &["studentjon@gmail.com"],
    )
    .await
    .expect("seed");
    register_students(&resources.database, "mary@gmail.com", &["aaa@gmail.com"])
        .await
        .expect("seed");

    let request = json_request(
        "POST",
        "/api/retrievefornotifications",
        &json!({
            "teacher": "teacherken@gmail.com",
            "notification": "Hello students! @aaa@gmail.com"
        }),
    );

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let mut recipients: Vec<String> = body["recipients"]
        .as_array()
        .expect("recipients array")
        .iter()
        .map(|v| v.as_str().expect("string").to_owned())
        .collect();
    recipients.sort();
    assert_eq!(recipients, vec!["aaa@gmail.com", "studentjon@gmail.com"]);
}

#[tokio::test]
async fn test_welcome_and_health_endpoints() {
    let (app, _resources) = build_test_app().await.expect("app");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Welcome to Rollcall!");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
}
