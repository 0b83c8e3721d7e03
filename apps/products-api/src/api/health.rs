//! Readiness endpoint

use axum::{extract::State, response::Response, routing::get, Router};
use axum_helpers::{run_health_checks, HealthCheckFuture};
use database::postgres::check_health;

use crate::state::AppState;

async fn ready(State(state): State<AppState>) -> Response {
    let mut checks = Vec::new();

    if let Some(db) = &state.db {
        let database: HealthCheckFuture<'_> =
            Box::pin(async move { check_health(db).await.map_err(|e| e.to_string()) });
        checks.push(("database", database));
    }

    run_health_checks(checks).await
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
