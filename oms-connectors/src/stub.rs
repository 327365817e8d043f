//! Stub catalog for testing.
//!
//! In-memory product catalog with controllable failures. Used by workflow
//! and API tests that need product lookups without a running product service.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

use crate::catalog::{ProductCatalog, ProductDetails};
use crate::error::LookupError;

/// In-memory catalog stub.
pub struct StubCatalog {
    /// Known products keyed by product ID
    products: RwLock<HashMap<String, ProductDetails>>,
    /// If true, the next lookup fails with a simulated transport error
    fail_next: RwLock<bool>,
}

impl StubCatalog {
    /// Create an empty stub catalog.
    pub fn new() -> Self {
        Self {
            products: RwLock::new(HashMap::new()),
            fail_next: RwLock::new(false),
        }
    }

    /// Register a product under the given ID.
    pub fn insert(&self, product_id: impl Into<String>, details: ProductDetails) {
        self.products.write().unwrap().insert(product_id.into(), details);
    }

    /// Make the next lookup fail with a transport error.
    pub fn set_fail_next(&self, fail: bool) {
        *self.fail_next.write().unwrap() = fail;
    }

    /// Check and reset the failure flag.
    fn should_fail(&self) -> bool {
        let mut flag = self.fail_next.write().unwrap();
        let fail = *flag;
        *flag = false;
        fail
    }
}

impl Default for StubCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductCatalog for StubCatalog {
    async fn fetch_product(&self, product_id: &str) -> Result<ProductDetails, LookupError> {
        if self.should_fail() {
            debug!(product_id, "stub catalog simulating lookup failure");
            return Err(LookupError::RequestFailed(
                "Simulated catalog failure".to_string(),
            ));
        }

        self.products
            .read()
            .unwrap()
            .get(product_id)
            .cloned()
            .ok_or_else(|| LookupError::NotFound { product_id: product_id.to_string() })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use oms_domain::Price;
    use rust_decimal_macros::dec;

    fn margherita() -> ProductDetails {
        ProductDetails {
            name: "Margherita".to_string(),
            price: Price::new(dec!(25)).unwrap(),
            description: "Tomato and mozzarella".to_string(),
            category: "Food".to_string(),
        }
    }

    #[tokio::test]
    async fn test_returns_inserted_product() {
        let catalog = StubCatalog::new();
        catalog.insert("pizza-1", margherita());

        let details = catalog.fetch_product("pizza-1").await.unwrap();
        assert_eq!(details.name, "Margherita");
        assert_eq!(details.price.as_decimal(), dec!(25));
    }

    #[tokio::test]
    async fn test_unknown_product_not_found() {
        let catalog = StubCatalog::new();

        let result = catalog.fetch_product("nope").await;
        assert!(matches!(
            result,
            Err(LookupError::NotFound { product_id }) if product_id == "nope"
        ));
    }

    #[tokio::test]
    async fn test_simulated_failure_resets() {
        let catalog = StubCatalog::new();
        catalog.insert("pizza-1", margherita());
        catalog.set_fail_next(true);

        let first = catalog.fetch_product("pizza-1").await;
        assert!(matches!(first, Err(LookupError::RequestFailed(_))));

        // Flag resets after one failure
        let second = catalog.fetch_product("pizza-1").await;
        assert!(second.is_ok());
    }
}
