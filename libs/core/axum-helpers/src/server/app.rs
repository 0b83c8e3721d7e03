use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::{create_cors_layer, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Combine API routes with documentation and cross-cutting middleware.
///
/// - Swagger UI at `/swagger-ui`, document at `/api-docs/openapi.json`
/// - `apis` nested under `/api`
/// - JSON 404 fallback
/// - request tracing, security headers, compression
/// - CORS only when `server_config.cors_allowed_origins` is non-empty
///
/// Domain routers apply their own state before being passed in.
pub fn create_router<T>(apis: Router, server_config: &ServerConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    if let Some(cors) = create_cors_layer(&server_config.cors_allowed_origins)? {
        router = router.layer(cors);
    }

    Ok(router.layer(CompressionLayer::new()))
}

/// Bind the configured address and serve until SIGINT/SIGTERM, then run
/// `cleanup` bounded by `server_config.shutdown_timeout`.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    serve_with_cleanup(
        listener,
        router,
        shutdown_signal(),
        cleanup,
        server_config.shutdown_timeout,
    )
    .await
}

/// Serve until `shutdown` resolves and in-flight requests drain, then run
/// `cleanup` for at most `cleanup_timeout`.
pub async fn serve_with_cleanup<S, F>(
    listener: TcpListener,
    router: Router,
    shutdown: S,
    cleanup: F,
    cleanup_timeout: Duration,
) -> io::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Starting cleanup tasks (timeout: {:?})", cleanup_timeout);
    match tokio::time::timeout(cleanup_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            cleanup_timeout
        ),
    }

    serve_result
}
