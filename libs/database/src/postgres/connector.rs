use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::PostgresConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};

/// Connect with the default pool settings of [`PostgresConfig::new`].
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_from_config(PostgresConfig::new(database_url)).await
}

/// Connect using a [`PostgresConfig`].
pub async fn connect_from_config(config: PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(config.into_connect_options()).await
}

async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!("Successfully connected to PostgreSQL database");
    Ok(db)
}

/// Connect from config, retrying with exponential backoff.
///
/// Passing `None` uses [`RetryConfig::default`]. Once the retries are spent
/// the last failure is returned as [`DatabaseError::ConnectionFailed`].
///
/// ```ignore
/// use database::common::RetryConfig;
/// use database::postgres::{PostgresConfig, connect_from_config_with_retry};
///
/// let config = PostgresConfig::from_env()?;
/// let db = connect_from_config_with_retry(config, Some(RetryConfig::new().with_max_retries(5))).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<DatabaseConnection> {
    let options = config.into_connect_options();

    retry_with_backoff(
        || connect_with_options(options.clone()),
        retry_config.unwrap_or_default(),
    )
    .await
    .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))
}

/// Apply every pending migration of `M`.
///
/// `app_name` is only used for logging.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None).await?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}
