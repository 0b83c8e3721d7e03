use validator::{Validate, ValidationErrors};

use crate::models::{Product, ProductDto};

/// Check an inbound DTO and turn it into a [`Product`].
///
/// Runs before any repository call; the error lists every failing field.
pub fn validate_product(dto: ProductDto) -> Result<Product, ValidationErrors> {
    dto.validate()?;

    Ok(Product {
        id: dto.id,
        name: dto.name,
        quantity: dto.quantity,
        price: dto.price,
    })
}
