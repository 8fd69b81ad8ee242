//! JSON body extractor with the API's own rejection messages.

use crate::errors::{messages, AppError};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON request body.
///
/// Unlike `axum::Json` this does not insist on a `Content-Type` header, and it
/// rejects with a plain 400:
/// - missing, zero-length or unreadable body → `Empty or unreadable body`
/// - anything `serde_json` cannot decode into `T` → `Invalid JSON input`
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::BadRequest(messages::EMPTY_BODY.to_string()))?;

        if bytes.is_empty() {
            return Err(AppError::BadRequest(messages::EMPTY_BODY.to_string()));
        }

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejected request body");
                AppError::BadRequest(messages::INVALID_JSON.to_string())
            })
    }
}
