use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use axum::Router;
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, warn, Level};

/// Wraps the API routes with the cross-cutting layers every app shares.
///
/// - routes are mounted at the root (no `/api` prefix)
/// - unmatched paths fall through to a plain-text 404
/// - every request gets an INFO-level span from `TraceLayer`
///
/// Domain routers apply their own state before being passed in.
pub fn create_router(routes: Router) -> Router {
    Router::new()
        .merge(routes)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Binds the listener and serves `router` until SIGINT or SIGTERM.
///
/// Once the server has drained, `cleanup` runs (typically closing the
/// database pool), bounded by `server_config.shutdown_timeout`.
///
/// # Errors
/// Returns an error if the listener fails to bind or the server fails while
/// running. A cleanup timeout is only logged.
pub async fn create_app<F>(router: Router, server_config: &ServerConfig, cleanup: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send,
{
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    let timeout = server_config.shutdown_timeout;
    info!("Starting cleanup tasks (timeout: {:?})", timeout);
    match tokio::time::timeout(timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => warn!("Cleanup exceeded timeout of {:?}, forcing shutdown", timeout),
    }

    serve_result
}
