//! Products Domain
//!
//! CRUD over a single `products` resource with name uniqueness.
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, validation gate, status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← uniqueness and existence rules (Postgres or in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, ProductDto, OperationResult
//! └─────────────┘
//! ```
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository};
//!
//! let router = handlers::router(InMemoryProductRepository::new());
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod validation;

pub use error::{ProductError, ProductResult};
pub use models::{OperationResult, Product, ProductDto, messages};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use validation::validate_product;
