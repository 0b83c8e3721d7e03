//! Reusable OpenAPI response definitions for error bodies.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": "InternalServerError",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "error": "BadRequest",
        "message": "Request validation failed",
        "details": {
            "name": [{
                "code": "length",
                "message": "name must be between 1 and 100 characters",
                "params": {"min": 1, "max": 100, "value": ""}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid path parameter",
    content_type = "application/json",
    example = json!({
        "error": "BadRequest",
        "message": "Invalid path parameter: abc"
    })
)]
pub struct BadRequestPathResponse(pub ErrorResponse);
