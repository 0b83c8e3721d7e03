use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Messages carried by [`OperationResult`] and the lookup 404 bodies.
pub mod messages {
    pub const ADDED: &str = "Product added to database successfully!";
    pub const ALREADY_EXISTS: &str = "Existing product already added";
    pub const NOT_FOUND: &str = "Product not found!";
    pub const UPDATED: &str = "Product is updated successfully";
    pub const DELETED: &str = "Product is deleted successfully";
    pub const NAME_TAKEN: &str = "Product name already used by another product";
    pub const NO_PRODUCTS: &str = "No products detected in the database";
    pub const REQUESTED_NOT_FOUND: &str = "Product requested not found";
}

/// A stored product. `id` is assigned by the store on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: Decimal,
}

/// Wire representation of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductDto {
    /// Ignored on create; selects the row on update
    #[serde(default)]
    #[schema(example = 1)]
    pub id: i32,

    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "name must be between 1 and 100 characters"),
        custom(function = "not_blank")
    )]
    #[schema(example = "Widget", min_length = 1, max_length = 100)]
    pub name: String,

    #[validate(range(min = 0, message = "quantity must not be negative"))]
    #[schema(example = 10, minimum = 0)]
    pub quantity: i32,

    #[validate(custom(function = "storable_price"))]
    #[schema(value_type = f64, example = 100.7, minimum = 0, maximum = 9999999999999999.99)]
    pub price: Decimal,
}

/// Outcome of a mutating repository call.
///
/// Expected business failures (duplicate name, unknown id) are reported here
/// with `success == false`, never as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OperationResult {
    pub success: bool,
    #[schema(example = "Product added to database successfully!")]
    pub message: String,
}

impl OperationResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            quantity: product.quantity,
            price: product.price,
        }
    }
}

fn not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::from("name is required")));
    }
    Ok(())
}

/// Prices are stored as `numeric(18, 2)`.
const PRICE_SCALE: u32 = 2;

fn storable_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        return Err(ValidationError::new("range")
            .with_message(Cow::from("price must not be negative")));
    }
    if *price > Decimal::new(999_999_999_999_999_999, PRICE_SCALE) {
        return Err(ValidationError::new("range")
            .with_message(Cow::from("price must not exceed 9999999999999999.99")));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(ValidationError::new("scale")
            .with_message(Cow::from("price must have at most 2 decimal places")));
    }
    Ok(())
}
