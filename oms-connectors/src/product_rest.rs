//! Product service REST client.
//!
//! Fetches product details from the product microservice during order
//! creation. Response payloads are validated into domain types before they
//! reach the workflow.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

use oms_domain::Price;

use crate::catalog::{ProductCatalog, ProductDetails};
use crate::error::LookupError;

/// Request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// REST client for the product service.
///
/// Wraps a pooled HTTP client; every lookup is a single GET with an explicit
/// per-call timeout and no retries.
pub struct ProductRestClient {
    /// HTTP client (pooled)
    client: Client,
    /// Product service base URL (e.g. "http://ms-product:8080")
    base_url: String,
}

impl ProductRestClient {
    /// Create a new product service client.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for a product lookup.
    fn product_url(&self, product_id: &str) -> String {
        format!("{}/api/v1/products/{}", self.base_url, product_id)
    }
}

#[async_trait]
impl ProductCatalog for ProductRestClient {
    async fn fetch_product(&self, product_id: &str) -> Result<ProductDetails, LookupError> {
        let url = self.product_url(product_id);

        let response = timeout(
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
            self.client.get(&url).send(),
        )
        .await
        .map_err(|_| LookupError::Timeout)?
        .map_err(|e| LookupError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            debug!(product_id, "product not found in catalog");
            return Err(LookupError::NotFound { product_id: product_id.to_string() });
        }
        if !status.is_success() {
            return Err(LookupError::Status { status: status.as_u16() });
        }

        let payload: ProductPayload = response
            .json()
            .await
            .map_err(|e| LookupError::ParseError(e.to_string()))?;

        into_details(payload)
    }
}

/// Wire shape of the product service response.
#[derive(Debug, Deserialize)]
struct ProductPayload {
    name: String,
    price: Decimal,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

/// Validate a raw payload into domain-typed product details.
fn into_details(payload: ProductPayload) -> Result<ProductDetails, LookupError> {
    let price = Price::new(payload.price)
        .map_err(|e| LookupError::ParseError(format!("Invalid price in response: {}", e)))?;

    Ok(ProductDetails {
        name: payload.name,
        price,
        description: payload.description.unwrap_or_default(),
        category: payload.category.unwrap_or_default(),
    })
}

// =============================================================================
// Tests
// =============================================================================
