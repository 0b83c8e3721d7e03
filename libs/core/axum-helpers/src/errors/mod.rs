pub mod handlers;
pub mod messages;
pub mod responses;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body returned by every error response.
///
/// ```json
/// {
///   "error": "BadRequest",
///   "message": "Request validation failed",
///   "details": { "name": [{ "code": "length", "message": null, "params": {} }] }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error kind
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Field-level validation errors, when there are any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Errors that handlers turn into HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonRejection(_) | AppError::Validation(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::JsonRejection(e) => {
                tracing::info!(error = %e.body_text(), "Rejected request body");
                ErrorResponse::new("BadRequest", messages::INVALID_JSON)
                    .with_details(json!({ "body": e.body_text() }))
            }
            AppError::Validation(e) => {
                tracing::info!(error = %e, "Validation failed");
                ErrorResponse::new("BadRequest", messages::VALIDATION_FAILED)
                    .with_details(validation_details(&e))
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                ErrorResponse::new("BadRequest", msg)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                ErrorResponse::new("InternalServerError", messages::INTERNAL_ERROR)
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Flatten validator output into `{ field: [{code, message, params}] }`.
pub fn validation_details(errors: &ValidationErrors) -> Value {
    let fields = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let entries: Vec<Value> = errors
                .iter()
                .map(|err| {
                    json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), Value::Array(entries))
        })
        .collect::<Map<_, _>>();

    Value::Object(fields)
}
