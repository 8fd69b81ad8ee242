use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{IdPath, JsonBody};
use std::sync::Arc;

use crate::error::UserResult;
use crate::models::CreateUser;
use crate::service::UserOperations;

/// Router for the user endpoints, meant to be nested under `/user`
pub fn router<S: UserOperations + 'static>(service: S) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_user::<S>))
        .route("/{id}", get(get_user::<S>))
        .with_state(shared_service)
}

/// Create a user; 201 with the stored user
async fn create_user<S: UserOperations>(
    State(service): State<Arc<S>>,
    JsonBody(input): JsonBody<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_user<S: UserOperations>(
    State(service): State<Arc<S>>,
    IdPath(id): IdPath,
) -> UserResult<impl IntoResponse> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}
