//! Integration tests for the status endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, get};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /status returns 200 with message and ISO-8601 time
// ---------------------------------------------------------------------------

#[tokio::test]
async fn status_returns_message_and_time() {
    let tmp = tempfile::tempdir().unwrap();
    let before = chrono::Utc::now() - chrono::Duration::seconds(1);
    let response = get(build_test_app(tmp.path()), "/status").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["message"].is_string());
    let time = chrono::DateTime::parse_from_rfc3339(json["time"].as_str().unwrap())
        .unwrap()
        .with_timezone(&chrono::Utc);
    assert!(time >= before);
}

// ---------------------------------------------------------------------------
// Test: GET /status has no side effects on storage
// ---------------------------------------------------------------------------

#[tokio::test]
async fn status_does_not_touch_storage() {
    let tmp = tempfile::tempdir().unwrap();
    let data_dir = common::data_dir(&tmp);
    let response = get(build_test_app(&data_dir), "/status").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(!data_dir.exists());
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let tmp = tempfile::tempdir().unwrap();
    let response = get(build_test_app(tmp.path()), "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: GET /submit is not allowed
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_on_submit_returns_405() {
    let tmp = tempfile::tempdir().unwrap();
    let response = get(build_test_app(tmp.path()), "/submit").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let tmp = tempfile::tempdir().unwrap();
    let response = get(build_test_app(tmp.path()), "/status").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a UUID (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_allows_post_from_configured_origin() {
    let tmp = tempfile::tempdir().unwrap();
    let app = build_test_app(tmp.path());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/submit")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("POST"),
        "Allow-Methods should contain POST, got: {allow_methods}"
    );
}
