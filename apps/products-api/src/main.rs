//! Products API - REST server over a Postgres or in-memory product store

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_with_retry, run_migrations};
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::{Config, StoreBackend};
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = match &config.store {
        StoreBackend::Postgres(pg) => {
            info!(max_connections = pg.max_connections, "Connecting to PostgreSQL");
            let db = connect_with_retry(pg, pg.retry_policy()).await?;
            run_migrations::<migration::Migrator>(&db, config.app.name).await?;
            Some(db)
        }
        StoreBackend::Memory => {
            warn!("Using the in-memory product store; data will not survive a restart");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        db,
    };

    let router = create_router::<openapi::ApiDoc>(api::routes(&state), &config.server)?;
    let app = router
        .merge(health_router(config.app))
        .merge(api::health::router(state.clone()));

    info!(
        app = config.app.name,
        version = config.app.version,
        port = config.server.port,
        "Starting Products API"
    );

    let db = state.db;
    create_production_app(app, &config.server, async move {
        if let Some(db) = db {
            info!("Shutting down: closing PostgreSQL pool");
            if let Err(e) = db.close().await {
                warn!(error = %e, "Failed to close PostgreSQL pool cleanly");
            }
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
