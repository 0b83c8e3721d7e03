//! PostgreSQL connectivity for the products service.
//!
//! - [`postgres::PostgresConfig`] loads pool settings from the environment
//! - [`postgres::connect_with_retry`] opens a SeaORM pool, retrying with backoff
//! - [`postgres::run_migrations`] applies any `MigratorTrait` implementation
//! - [`postgres::check_health`] backs the readiness probe
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use database::RetryPolicy;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_with_retry(&config, RetryPolicy::default()).await?;
//! postgres::run_migrations::<migration::Migrator>(&db, "products_api").await?;
//! ```

pub mod error;
pub mod postgres;
pub mod retry;

pub use error::{DatabaseError, DatabaseResult};
pub use retry::{RetryPolicy, retry_with_backoff};
