//! # Axum Helpers
//!
//! Shared HTTP plumbing for the products service.
//!
//! - **[`errors`]**: [`AppError`] and the JSON [`ErrorResponse`] body
//! - **[`extractors`]**: [`JsonBody`] and [`IdPath`] with 400 rejections
//! - **[`http`]**: security headers and CORS
//! - **[`server`]**: router assembly, health endpoints, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{AppError, ErrorResponse};
pub use extractors::{IdPath, JsonBody};
pub use http::{create_cors_layer, security_headers};
pub use server::{
    HealthCheckFuture, HealthResponse, create_production_app, create_router, health_router,
    run_health_checks, serve_with_cleanup, shutdown_signal,
};
