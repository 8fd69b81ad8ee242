//! Custom extractors for Axum handlers.
//!
//! Both reject with [`AppError::BadRequest`](crate::errors::AppError) so a
//! malformed request never reaches a service.

pub mod id_path;
pub mod json_body;

pub use id_path::IdPath;
pub use json_body::JsonBody;
