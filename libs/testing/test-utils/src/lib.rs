//! Shared test utilities for the products workspace
//!
//! - `TestDatabase`: PostgreSQL container with the schema migrated
//! - `TestDataBuilder`: deterministic, per-test product data
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! # async fn example() {
//! let db = TestDatabase::new().await;
//! let builder = TestDataBuilder::from_test_name("my_test");
//! let name = builder.name("widget");
//! # }
//! ```

mod postgres;

pub use postgres::TestDatabase;

use rust_decimal::Decimal;

/// Builder for test data derived from a seed.
///
/// Tests sharing one database stay isolated because names embed the seed.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a hash of the test name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let a = TestDataBuilder::from_test_name("test_create_product");
    /// let b = TestDataBuilder::from_test_name("test_create_product");
    /// assert_eq!(a.name("widget"), b.name("widget"));
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A product name unique to this builder, e.g. `test-12345-widget`.
    pub fn name(&self, suffix: &str) -> String {
        format!("test-{}-{}", self.seed, suffix)
    }

    /// A price with two decimal places, from whole cents.
    pub fn price(&self, cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }
}
