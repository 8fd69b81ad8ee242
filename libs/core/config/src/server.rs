use crate::{env_or_default, env_parse_or_default, ConfigError, FromEnv};
use std::net::Ipv4Addr;
use std::time::Duration;

/// HTTP listener configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// How long shutdown cleanup may run before the process exits anyway
    pub shutdown_timeout: Duration,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            ..Self::default()
        }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// Reads from environment variables with defaults:
    /// - HOST: 0.0.0.0
    /// - PORT: 8080
    /// - SHUTDOWN_TIMEOUT_SECS: 30
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_parse_or_default("PORT", "8080")?;
        let shutdown_secs: u64 = env_parse_or_default("SHUTDOWN_TIMEOUT_SECS", "30")?;

        Ok(Self {
            host,
            port,
            shutdown_timeout: Duration::from_secs(shutdown_secs),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: 8080,
            shutdown_timeout: Duration::from_secs(30),
        }
    }
}
