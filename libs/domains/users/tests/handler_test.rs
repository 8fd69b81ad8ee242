//! Handler tests for the Users domain
//!
//! These run the real router and service against the in-memory store and
//! check status codes and bodies as a client sees them.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_users::*;
use http_body_util::BodyExt;
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let service = UserService::new(InMemoryUserRepository::new());
    Router::new().nest("/user", handlers::router(service))
}

async fn body_text(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn post_user(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/user")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_create_then_get_user() {
    let app = app();

    let response = app.clone().oneshot(post_user(r#"{"name":"Alice"}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: User = serde_json::from_str(&body_text(response.into_body()).await).unwrap();
    assert_eq!(created, User { id: 1, name: "Alice".into() });

    let response = app.oneshot(get("/user/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response.into_body()).await.contains(r#""name":"Alice""#));
}

#[tokio::test]
async fn test_create_user_with_empty_name_returns_400() {
    let response = app().oneshot(post_user(r#"{"name":""}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response.into_body()).await, "name required");
}

#[tokio::test]
async fn test_create_user_with_empty_body_returns_400() {
    let response = app().oneshot(post_user("")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response.into_body()).await, "Empty or unreadable body");
}

#[tokio::test]
async fn test_create_user_with_malformed_json_returns_400() {
    let response = app().oneshot(post_user(r#"{"name":"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response.into_body()).await, "Invalid JSON input");
}

#[tokio::test]
async fn test_get_unknown_user_returns_400() {
    let response = app().oneshot(get("/user/42")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response.into_body()).await, "user not found");
}

#[tokio::test]
async fn test_get_user_with_zero_id_returns_400() {
    let response = app().oneshot(get("/user/0")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response.into_body()).await, "invalid id");
}

#[tokio::test]
async fn test_get_user_with_non_numeric_id_returns_400() {
    let response = app().oneshot(get("/user/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response.into_body()).await, "Invalid ID format");
}
