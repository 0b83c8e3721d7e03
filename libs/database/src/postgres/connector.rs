use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::PostgresConfig;
use crate::{DatabaseError, DatabaseResult, RetryPolicy, retry_with_backoff};

/// Open a pool with the given settings, failing on the first error.
pub async fn connect(config: &PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(config.clone().into_connect_options()).await?;
    info!(
        max_connections = config.max_connections,
        "Connected to PostgreSQL"
    );
    Ok(db)
}

/// Open a pool, retrying with exponential backoff while the server is
/// unreachable. Useful when the database container starts alongside the API.
pub async fn connect_with_retry(
    config: &PostgresConfig,
    policy: RetryPolicy,
) -> DatabaseResult<DatabaseConnection> {
    retry_with_backoff(policy, || connect(config))
        .await
        .map_err(|(attempts, source)| DatabaseError::ConnectionFailed { attempts, source })
}

/// Apply all pending migrations of `M`.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> DatabaseResult<()> {
    info!(app = app_name, "Running database migrations");
    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    info!(app = app_name, "Migrations completed");
    Ok(())
}
