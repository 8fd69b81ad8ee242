//! Shared application state.

/// Cloned into the readiness handler and the shutdown hook; the connection
/// pool is reference counted so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: database::postgres::DatabaseConnection,
}
