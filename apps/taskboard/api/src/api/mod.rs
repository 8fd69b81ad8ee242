use axum::Router;
use axum_helpers::server::{create_router, health_router};
use domain_tasks::{PgTaskRepository, TaskService};
use domain_users::{PgUserRepository, UserService};

pub mod health;

/// The full application router.
///
/// Domain routes, `/health` and `/ready` are all merged before
/// `create_router` wraps them, so every endpoint is traced and shares the
/// plain-text 404 fallback.
pub fn app(state: &crate::state::AppState) -> Router {
    let routes = routes(state)
        .merge(health_router(state.config.app))
        .merge(ready_router(state.clone()));

    create_router(routes)
}

/// Builds the domain routes, mounted at the root.
///
/// The task service gets its own handle on the user service to check owners.
pub fn routes(state: &crate::state::AppState) -> Router {
    let users = UserService::new(PgUserRepository::new(state.db.clone()));
    let tasks = TaskService::new(PgTaskRepository::new(state.db.clone()), users.clone());

    Router::new()
        .nest("/task", domain_tasks::handlers::router(tasks))
        .nest("/user", domain_users::handlers::router(users))
}

/// Router serving `/ready`, with state applied so it can be merged into the app.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
