use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorResponse, messages};

/// Router fallback for unknown paths.
pub async fn not_found() -> Response {
    let body = ErrorResponse::new("NotFound", messages::NOT_FOUND_RESOURCE);
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
