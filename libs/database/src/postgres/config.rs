use core_config::{ConfigError, FromEnv, env_parse_or, env_required};
use sea_orm::ConnectOptions;
use std::time::Duration;

use crate::RetryPolicy;

/// Connection pool settings for PostgreSQL.
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    /// Extra connection attempts made at startup before giving up.
    pub connect_retries: u32,
    /// Log every statement through sqlx.
    pub sqlx_logging: bool,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 20,
            min_connections: 2,
            connect_timeout: Duration::from_secs(8),
            connect_retries: 3,
            sqlx_logging: false,
        }
    }

    pub fn with_pool_size(mut self, max_connections: u32, min_connections: u32) -> Self {
        self.max_connections = max_connections;
        self.min_connections = min_connections;
        self
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.connect_retries)
    }

    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url);
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections.min(self.max_connections))
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.connect_timeout)
            .sqlx_logging(self.sqlx_logging);
        opt
    }
}

impl FromEnv for PostgresConfig {
    /// - `DATABASE_URL`: required
    /// - `DB_MAX_CONNECTIONS`: defaults to 20
    /// - `DB_MIN_CONNECTIONS`: defaults to 2
    /// - `DB_CONNECT_TIMEOUT_SECS`: defaults to 8
    /// - `DB_CONNECT_RETRIES`: defaults to 3
    /// - `DB_SQLX_LOGGING`: defaults to false
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_required("DATABASE_URL")?;
        let timeout_secs = env_parse_or("DB_CONNECT_TIMEOUT_SECS", 8u64)?;

        Ok(Self {
            url,
            max_connections: env_parse_or("DB_MAX_CONNECTIONS", 20)?,
            min_connections: env_parse_or("DB_MIN_CONNECTIONS", 2)?,
            connect_timeout: Duration::from_secs(timeout_secs),
            connect_retries: env_parse_or("DB_CONNECT_RETRIES", 3)?,
            sqlx_logging: env_parse_or("DB_SQLX_LOGGING", false)?,
        })
    }
}
