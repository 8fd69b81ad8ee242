use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{AppError, IdPath, JsonBody};
use std::sync::Arc;

use crate::error::TaskResult;
use crate::models::{CreateTask, Task};
use crate::service::TaskOperations;

const LIST_FAILED: &str = "Failed to fetch tasks";

/// Router for the task endpoints, meant to be nested under `/task`
pub fn router<S: TaskOperations + 'static>(service: S) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(view_tasks::<S>).post(create_task::<S>))
        .route(
            "/{id}",
            get(get_task::<S>).put(update_task::<S>).delete(delete_task::<S>),
        )
        .with_state(shared_service)
}

/// Create a task; 201 with the stored task
async fn create_task<S: TaskOperations>(
    State(service): State<Arc<S>>,
    JsonBody(input): JsonBody<CreateTask>,
) -> TaskResult<impl IntoResponse> {
    let task = service.create_task(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// List every task; store failures are reported as a generic 500
async fn view_tasks<S: TaskOperations>(
    State(service): State<Arc<S>>,
) -> Result<Json<Vec<Task>>, AppError> {
    service.view_tasks().await.map(Json).map_err(|e| {
        tracing::error!(error = %e, "Listing tasks failed");
        AppError::InternalServerError(LIST_FAILED.to_string())
    })
}

async fn get_task<S: TaskOperations>(
    State(service): State<Arc<S>>,
    IdPath(id): IdPath,
) -> TaskResult<impl IntoResponse> {
    let task = service.get_task(id).await?;
    Ok(Json(task))
}

/// Mark a task completed; 200 with no body
async fn update_task<S: TaskOperations>(
    State(service): State<Arc<S>>,
    IdPath(id): IdPath,
) -> TaskResult<StatusCode> {
    service.update_task(id).await?;
    Ok(StatusCode::OK)
}

/// Delete a task; 200 with no body
async fn delete_task<S: TaskOperations>(
    State(service): State<Arc<S>>,
    IdPath(id): IdPath,
) -> TaskResult<StatusCode> {
    service.delete_task(id).await?;
    Ok(StatusCode::OK)
}
