//! Readiness check backed by a real database round trip.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{run_health_checks, HealthCheckFuture};

/// 200 when `SELECT 1` succeeds, 503 otherwise.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            database::postgres::check_health(&state.db)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{server::ServerConfig, AppInfo, Environment};
    use database::postgres::PostgresConfig;
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use tower::ServiceExt;

    fn state(db: database::postgres::DatabaseConnection) -> AppState {
        AppState {
            config: Config {
                app: AppInfo {
                    name: "taskboard_api",
                    version: "0.0.0",
                },
                database: PostgresConfig::new("postgresql://localhost/taskboard"),
                server: ServerConfig::default(),
                environment: Environment::Development,
            },
            db,
        }
    }

    async fn ready(db: database::postgres::DatabaseConnection) -> (StatusCode, serde_json::Value) {
        let response = crate::api::ready_router(state(db))
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_ready_when_database_answers() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![std::collections::BTreeMap::from([(
                "?column?".to_string(),
                sea_orm::Value::Int(Some(1)),
            )])]])
            .into_connection();

        let (status, body) = ready(db).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_not_ready_when_database_fails() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".into())])
            .into_connection();

        let (status, body) = ready(db).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "not ready");
        assert_eq!(body["database"], "disconnected");
    }
}
