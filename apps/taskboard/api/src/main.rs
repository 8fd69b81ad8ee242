use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::run_migrations::<Migrator>(&db, config.app.name)
        .await
        .map_err(|e| eyre::eyre!("Migrations failed: {}", e))?;

    let state = AppState { config, db };

    let app = api::app(&state);

    info!(
        "Starting {} v{} ({:?})",
        state.config.app.name, state.config.app.version, state.config.environment
    );

    create_app(app, &state.config.server, async move {
        info!("Shutting down: closing database connections");
        match state.db.close().await {
            Ok(_) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Taskboard API shutdown complete");
    Ok(())
}
