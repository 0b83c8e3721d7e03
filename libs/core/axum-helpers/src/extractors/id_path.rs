use crate::errors::{AppError, messages};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Integer identifier taken from the single path parameter.
///
/// Anything that does not parse as an `i32` is a 400 with an [`AppError`] body.
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("{}: {}", messages::INVALID_PATH, e)))?;

        raw.trim()
            .parse::<i32>()
            .map(IdPath)
            .map_err(|_| AppError::BadRequest(format!("{}: {}", messages::INVALID_PATH, raw)))
    }
}
