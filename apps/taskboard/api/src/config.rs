use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration composed from the shared config pieces
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // DATABASE_URL is required
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080 unless set

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_requires_database_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/taskboard")),
                ("PORT", Some("9000")),
                ("APP_ENV", Some("production")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "taskboard_api");
                assert_eq!(config.server.port, 9000);
                assert!(config.environment.is_production());
            },
        );
    }
}
