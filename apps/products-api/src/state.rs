//! Application state management

use database::postgres::DatabaseConnection;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// `None` when running on the in-memory store.
    pub db: Option<DatabaseConnection>,
}
