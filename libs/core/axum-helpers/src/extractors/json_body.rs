use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// JSON body extractor whose rejections are 400 [`AppError`] responses.
///
/// Only the shape is checked here. Field rules run in the handler so they can
/// be applied before any business logic.
///
/// ```ignore
/// async fn create(JsonBody(dto): JsonBody<ProductDto>) -> Result<Json<OperationResult>, AppError> {
///     let product = validate_product(dto)?;
///     // ...
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}
