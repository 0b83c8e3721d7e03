use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{OperationResult, Product, messages};

/// Repository trait for Product persistence.
///
/// Business outcomes come back as data: `None` for an unknown id, a failed
/// [`OperationResult`] for a rejected write. `Err` means the store itself
/// failed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Get a product by ID
    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// All products in insertion order
    async fn get_all(&self) -> ProductResult<Vec<Product>>;

    /// Insert unless a product with exactly the same name exists.
    /// The input `id` is ignored.
    async fn create(&self, product: Product) -> ProductResult<OperationResult>;

    /// Overwrite name, quantity and price of the product with `product.id`.
    async fn update(&self, product: Product) -> ProductResult<OperationResult>;

    /// Delete a product by ID
    async fn delete(&self, id: i32) -> ProductResult<OperationResult>;
}

#[derive(Debug, Default)]
struct Store {
    products: Vec<Product>,
    last_id: i32,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.products.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.iter().find(|p| p.id == id).cloned())
    }

    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.clone())
    }

    async fn create(&self, product: Product) -> ProductResult<OperationResult> {
        let mut store = self.store.write().await;

        if store.products.iter().any(|p| p.name == product.name) {
            tracing::info!(name = %product.name, "Rejected duplicate product");
            return Ok(OperationResult::failed(messages::ALREADY_EXISTS));
        }

        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| ProductError::Internal("product id space exhausted".to_string()))?;
        store.last_id = id;
        store.products.push(Product { id, ..product });

        tracing::info!(product_id = id, "Created product");
        Ok(OperationResult::ok(messages::ADDED))
    }

    async fn update(&self, product: Product) -> ProductResult<OperationResult> {
        let mut store = self.store.write().await;

        let name_taken = store
            .products
            .iter()
            .any(|p| p.id != product.id && p.name == product.name);

        let Some(existing) = store.products.iter_mut().find(|p| p.id == product.id) else {
            return Ok(OperationResult::failed(messages::NOT_FOUND));
        };

        if name_taken {
            tracing::info!(product_id = product.id, name = %product.name, "Rejected rename onto existing name");
            return Ok(OperationResult::failed(messages::NAME_TAKEN));
        }

        existing.name = product.name;
        existing.quantity = product.quantity;
        existing.price = product.price;

        tracing::info!(product_id = product.id, "Updated product");
        Ok(OperationResult::ok(messages::UPDATED))
    }

    async fn delete(&self, id: i32) -> ProductResult<OperationResult> {
        let mut store = self.store.write().await;

        let Some(index) = store.products.iter().position(|p| p.id == id) else {
            return Ok(OperationResult::failed(messages::NOT_FOUND));
        };
        store.products.remove(index);

        tracing::info!(product_id = id, "Deleted product");
        Ok(OperationResult::ok(messages::DELETED))
    }
}
