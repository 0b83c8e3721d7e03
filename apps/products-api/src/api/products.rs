//! Products API routes

use axum::Router;
use domain_products::{handlers, InMemoryProductRepository, PgProductRepository};

use crate::state::AppState;

/// Create products router backed by whichever store the state carries
pub fn router(state: &AppState) -> Router {
    match &state.db {
        Some(db) => handlers::router(PgProductRepository::new(db.clone())),
        None => handlers::router(InMemoryProductRepository::new()),
    }
}
