//! # Axum Helpers
//!
//! Shared HTTP plumbing for the taskboard services.
//!
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown
//! - **[`errors`]**: [`AppError`], rendered as a plain-text body with the matching status
//! - **[`extractors`]**: [`IdPath`] and [`JsonBody`] with the API's rejection messages
//!
//! ```ignore
//! use axum_helpers::{create_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let router = create_router(api_routes).merge(health_router(app_info!()));
//! create_app(router, &ServerConfig::default(), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::AppError;
pub use extractors::{IdPath, JsonBody};
pub use server::{
    create_app, create_router, health_router, run_health_checks, shutdown_signal,
    HealthCheckFuture, HealthResponse,
};
