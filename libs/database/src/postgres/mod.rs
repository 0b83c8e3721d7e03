//! PostgreSQL pool configuration, connection, migrations and health probing.

mod config;
mod connector;
mod health;

pub use config::PostgresConfig;
pub use connector::{connect, connect_with_retry, run_migrations};
pub use health::check_health;

pub use sea_orm::{DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
