//! Configuration for Products API

use core_config::{app_info, env_or_default, server::ServerConfig, AppInfo, ConfigError, FromEnv};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Where products are kept, selected by `STORE_BACKEND`.
#[derive(Clone, Debug)]
pub enum StoreBackend {
    Postgres(PostgresConfig),
    /// Process-local store; contents are lost on restart.
    Memory,
}

impl FromEnv for StoreBackend {
    fn from_env() -> Result<Self, ConfigError> {
        let backend = env_or_default("STORE_BACKEND", "postgres");

        match backend.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(StoreBackend::Postgres(PostgresConfig::from_env()?)),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(ConfigError::ParseError {
                key: "STORE_BACKEND".to_string(),
                details: format!("expected 'postgres' or 'memory', got '{other}'"),
            }),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub store: StoreBackend,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
            store: StoreBackend::from_env()?,
        })
    }
}
