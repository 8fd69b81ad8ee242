use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::DatabaseError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum UserError {
    /// Input rejected before the store was consulted
    #[error("{0}")]
    Validation(String),

    /// The entity kind that was looked up and not found
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Store failure other than "no matching row", passed through unchanged
    #[error(transparent)]
    Dependency(#[from] DatabaseError),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<ValidationErrors> for UserError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(ToString::to_string))
            .unwrap_or_else(|| errors.to_string());
        UserError::Validation(message)
    }
}

/// Every user-facing failure is a 400 with the message as body.
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
