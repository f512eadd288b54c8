//! Server configuration.

use std::env;
use std::time::Duration;

use todo_store::RetryPolicy;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Database connection URL; absence selects the in-memory backend.
    pub database_url: Option<String>,
    /// Maximum schema-initialization attempts at startup.
    pub init_max_attempts: u32,
    /// Seconds to sleep between initialization attempts.
    pub init_retry_interval_secs: u64,
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("TODO_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("TODO_SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            database_url: env::var("DATABASE_URL").ok(),
            init_max_attempts: env::var("TODO_DB_INIT_ATTEMPTS")
                .unwrap_or_else(|_| "12".to_string())
                .parse()
                .unwrap_or(12),
            init_retry_interval_secs: env::var("TODO_DB_INIT_INTERVAL_SECS")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .unwrap_or(3),
            log_level: env::var("TODO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the startup retry policy.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.init_max_attempts,
            interval: Duration::from_secs(self.init_retry_interval_secs),
        }
    }
}
