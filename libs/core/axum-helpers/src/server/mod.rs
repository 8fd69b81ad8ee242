//! Server infrastructure: router assembly, health endpoints and graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let router = create_router(api_routes).merge(health_router(app_info!()));
//! create_app(router, &ServerConfig::default(), async { db.close().await.ok(); }).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use health::{health_router, run_health_checks, HealthCheckFuture, HealthResponse};
pub use shutdown::shutdown_signal;
