//! Client-facing messages for error bodies.
//!
//! 5xx bodies always use one of these generic strings; the underlying cause
//! is logged instead of returned.

pub const VALIDATION_FAILED: &str = "Request validation failed";
pub const INVALID_JSON: &str = "Request body is not valid JSON for this endpoint";
pub const INVALID_PATH: &str = "Invalid path parameter";
pub const NOT_FOUND_RESOURCE: &str = "The requested resource was not found";
pub const INTERNAL_ERROR: &str = "An internal server error occurred";
