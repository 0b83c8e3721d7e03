use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

/// Infrastructure failures. Business outcomes never use this type; they are
/// reported through `OperationResult` or `Option`.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<DbErr> for ProductError {
    fn from(err: DbErr) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
