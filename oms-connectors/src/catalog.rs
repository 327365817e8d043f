//! Product catalog port definition.
//!
//! The port defines the interface to the external product service.
//! Adapters implement it for specific transports (REST, stub for tests).

use async_trait::async_trait;
use oms_domain::Price;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// Port for product lookups during order enrichment.
///
/// Implementations:
/// - `ProductRestClient` - the product microservice's REST API
/// - `StubCatalog` - for testing (in-memory product map)
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetch the details of a single product.
    ///
    /// A missing product surfaces as `LookupError::NotFound`, which callers
    /// treat differently from transport or server failures.
    async fn fetch_product(&self, product_id: &str) -> Result<ProductDetails, LookupError>;
}

/// Product details captured into order line items at creation time.
///
/// The category label set belongs to the catalog; it is carried through
/// unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetails {
    /// Display name
    pub name: String,
    /// Unit price
    pub price: Price,
    /// Free-form description
    pub description: String,
    /// Catalog-owned category label (e.g. "Food", "Beverage")
    pub category: String,
}
