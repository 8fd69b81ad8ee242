//! Handler tests for the Tasks domain
//!
//! The task and user routers are mounted together over in-memory stores so
//! the owner check runs through the real user service.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_tasks::*;
use domain_users::{InMemoryUserRepository, UserService};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let users = UserService::new(InMemoryUserRepository::new());
    let tasks = TaskService::new(InMemoryTaskRepository::new(), users.clone());

    Router::new()
        .nest("/task", handlers::router(tasks))
        .nest("/user", domain_users::handlers::router(users))
}

async fn body_text(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn request(method: &str, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    (status, body_text(response.into_body()).await)
}

/// Creates user 1 so tasks have an owner
async fn with_alice(app: &Router) {
    let (status, _) = send(app, request("POST", "/user", r#"{"name":"Alice"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_task_returns_201_with_task() {
    let app = app();
    with_alice(&app).await;

    let body = json!({ "description": "Buy groceries", "owner_id": 1 }).to_string();
    let (status, text) = send(&app, request("POST", "/task", body)).await;

    assert_eq!(status, StatusCode::CREATED);
    let task: Task = serde_json::from_str(&text).unwrap();
    assert_eq!(
        task,
        Task {
            id: 1,
            description: "Buy groceries".into(),
            completed: false,
            owner_id: 1,
        }
    );
}

#[tokio::test]
async fn test_create_task_with_legacy_field_names() {
    let app = app();
    with_alice(&app).await;

    let body = json!({ "task": "Walk the dog", "user_id": 1 }).to_string();
    let (status, text) = send(&app, request("POST", "/task", body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(text.contains(r#""description":"Walk the dog""#));
}

#[tokio::test]
async fn test_create_task_unknown_owner_returns_400() {
    let app = app();

    let body = json!({ "description": "Buy groceries", "owner_id": 7 }).to_string();
    let (status, text) = send(&app, request("POST", "/task", body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "user ID not found");

    let (_, list) = send(&app, request("GET", "/task", Body::empty())).await;
    assert_eq!(list, "[]");
}

#[tokio::test]
async fn test_create_task_empty_description_returns_400() {
    let app = app();
    with_alice(&app).await;

    let body = json!({ "description": "", "owner_id": 1 }).to_string();
    let (status, text) = send(&app, request("POST", "/task", body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "task cannot be empty");
}

#[tokio::test]
async fn test_create_task_empty_body_returns_400() {
    let (status, text) = send(&app(), request("POST", "/task", Body::empty())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "Empty or unreadable body");
}

#[tokio::test]
async fn test_create_task_invalid_json_returns_400() {
    let (status, text) = send(&app(), request("POST", "/task", "{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "Invalid JSON input");
}

#[tokio::test]
async fn test_view_tasks_empty_returns_200() {
    let (status, text) = send(&app(), request("GET", "/task", Body::empty())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, "[]");
}

#[tokio::test]
async fn test_update_then_get_task() {
    let app = app();
    with_alice(&app).await;
    let body = json!({ "description": "Buy groceries", "owner_id": 1 }).to_string();
    send(&app, request("POST", "/task", body)).await;

    let (status, text) = send(&app, request("PUT", "/task/1", Body::empty())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(text.is_empty());

    let (status, text) = send(&app, request("GET", "/task/1", Body::empty())).await;
    assert_eq!(status, StatusCode::OK);
    let task: Task = serde_json::from_str(&text).unwrap();
    assert!(task.completed);
}

#[tokio::test]
async fn test_update_task_zero_id_returns_400() {
    let (status, text) = send(&app(), request("PUT", "/task/0", Body::empty())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "invalid id");
}

#[tokio::test]
async fn test_delete_task_then_get_returns_400() {
    let app = app();
    with_alice(&app).await;
    let body = json!({ "description": "Buy groceries", "owner_id": 1 }).to_string();
    send(&app, request("POST", "/task", body)).await;

    let (status, text) = send(&app, request("DELETE", "/task/1", Body::empty())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(text.is_empty());

    let (status, text) = send(&app, request("GET", "/task/1", Body::empty())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "task not found");
}

#[tokio::test]
async fn test_delete_missing_task_returns_400() {
    let (status, text) = send(&app(), request("DELETE", "/task/99", Body::empty())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "task not found");
}

#[tokio::test]
async fn test_get_task_non_numeric_id_returns_400() {
    let (status, text) = send(&app(), request("GET", "/task/abc", Body::empty())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "Invalid ID format");
}

/// Service whose listing always fails, to exercise the 500 path
struct BrokenList;

#[async_trait]
impl TaskOperations for BrokenList {
    async fn create_task(&self, _input: CreateTask) -> TaskResult<Task> {
        unimplemented!()
    }

    async fn get_task(&self, _id: i32) -> TaskResult<Task> {
        unimplemented!()
    }

    async fn view_tasks(&self) -> TaskResult<Vec<Task>> {
        Err(TaskError::Dependency(database::DatabaseError::Generic(
            "relation \"tasks\" does not exist".into(),
        )))
    }

    async fn update_task(&self, _id: i32) -> TaskResult<()> {
        unimplemented!()
    }

    async fn delete_task(&self, _id: i32) -> TaskResult<()> {
        unimplemented!()
    }
}

#[tokio::test]
async fn test_view_tasks_store_failure_returns_500() {
    let app = Router::new().nest("/task", handlers::router(BrokenList));

    let (status, text) = send(&app, request("GET", "/task", Body::empty())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(text, "Failed to fetch tasks");
}
