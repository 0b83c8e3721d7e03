//! Extractors that reject with [`AppError`](crate::AppError) bodies instead of
//! axum's plain-text defaults.

pub mod id_path;
pub mod json_body;

pub use id_path::IdPath;
pub use json_body::JsonBody;
