//! Integer `{id}` path parameter extractor.

use crate::errors::{messages, AppError};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Extractor for a numeric `{id}` path segment.
///
/// Only the format is checked here; range checks (such as `id <= 0`) belong to
/// the service layer.
///
/// ```ignore
/// async fn get_task(IdPath(id): IdPath) -> String {
///     format!("task {id}")
/// }
///
/// let app = Router::new().route("/task/{id}", get(get_task));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest(messages::MISSING_ID.to_string()))?;

        if raw.is_empty() {
            return Err(AppError::BadRequest(messages::MISSING_ID.to_string()));
        }

        raw.parse::<i32>()
            .map(IdPath)
            .map_err(|_| AppError::BadRequest(messages::INVALID_ID.to_string()))
    }
}
