use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    AppError, IdPath, JsonBody,
    errors::responses::{
        BadRequestPathResponse, BadRequestValidationResponse, InternalServerErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{OperationResult, ProductDto, messages};
use crate::repository::ProductRepository;
use crate::validation::validate_product;

const TAG: &str = "Products";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, get_product, create_product, update_product, delete_product),
    components(
        schemas(ProductDto, OperationResult),
        responses(
            BadRequestValidationResponse,
            BadRequestPathResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Product catalogue endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router; mount it under `/products`.
pub fn router<R: ProductRepository + 'static>(repository: R) -> Router {
    let shared_repository = Arc::new(repository);

    Router::new()
        .route(
            "/",
            get(list_products::<R>)
                .post(create_product::<R>)
                .put(update_product::<R>),
        )
        .route(
            "/{id}",
            get(get_product::<R>).delete(delete_product::<R>),
        )
        .with_state(shared_repository)
}

/// 200 for a successful operation, 400 otherwise; the body is the result either way.
fn operation_response(result: OperationResult) -> Response {
    let status = if result.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(result)).into_response()
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All products in insertion order", body = Vec<ProductDto>),
        (status = 404, description = "The store is empty", body = String, content_type = "text/plain",
            example = json!("No products detected in the database")),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(repository): State<Arc<R>>,
) -> Result<Response, AppError> {
    let products = repository.get_all().await?;

    if products.is_empty() {
        return Ok((StatusCode::NOT_FOUND, messages::NO_PRODUCTS).into_response());
    }

    let dtos: Vec<ProductDto> = products.into_iter().map(ProductDto::from).collect();
    Ok(Json(dtos).into_response())
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductDto),
        (status = 400, response = BadRequestPathResponse),
        (status = 404, description = "No product with this ID", body = String, content_type = "text/plain",
            example = json!("Product requested not found")),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(repository): State<Arc<R>>,
    IdPath(id): IdPath,
) -> Result<Response, AppError> {
    match repository.find_by_id(id).await? {
        Some(product) => Ok(Json(ProductDto::from(product)).into_response()),
        None => Ok((StatusCode::NOT_FOUND, messages::REQUESTED_NOT_FOUND).into_response()),
    }
}

/// Create a product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = ProductDto,
    responses(
        (status = 200, description = "Product created", body = OperationResult),
        (status = 400, description = "Invalid input or duplicate name; the body is either a validation error or a failed OperationResult", body = OperationResult),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(repository): State<Arc<R>>,
    JsonBody(dto): JsonBody<ProductDto>,
) -> Result<Response, AppError> {
    let product = validate_product(dto)?;
    let result = repository.create(product).await?;
    Ok(operation_response(result))
}

/// Update a product; the ID in the body selects the row
#[utoipa::path(
    put,
    path = "",
    tag = TAG,
    request_body = ProductDto,
    responses(
        (status = 200, description = "Product updated", body = OperationResult),
        (status = 400, description = "Invalid input, unknown ID or name already taken", body = OperationResult),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(repository): State<Arc<R>>,
    JsonBody(dto): JsonBody<ProductDto>,
) -> Result<Response, AppError> {
    let product = validate_product(dto)?;
    let result = repository.update(product).await?;
    Ok(operation_response(result))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = OperationResult),
        (status = 400, description = "Unknown ID or invalid path", body = OperationResult),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(repository): State<Arc<R>>,
    IdPath(id): IdPath,
) -> Result<Response, AppError> {
    let result = repository.delete(id).await?;
    Ok(operation_response(result))
}
