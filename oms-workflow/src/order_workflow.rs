//! Order Workflow: the order lifecycle use cases.
//!
//! The workflow sits between the HTTP API and the ports:
//!
//! ```text
//! API (create/list/get/update) → OrderWorkflow → ProductCatalog (enrichment)
//!                                             → OrderStore      (persistence)
//! ```
//!
//! Creation validates everything before any I/O, fetches product details
//! concurrently and fails fast, and persists only complete orders.

use std::sync::Arc;

use futures_util::future::try_join_all;
use tracing::{debug, info};

use oms_connectors::{LookupError, ProductCatalog};
use oms_domain::{LineItem, Order, OrderId, OrderStatus, Quantity};
use oms_store::OrderStore;

use crate::error::WorkflowError;

// =============================================================================
// New Line Item
// =============================================================================

/// Caller-supplied shape of one order line, before enrichment.
///
/// Quantity arrives as a raw integer and is validated into [`Quantity`]
/// during creation, so a non-positive value is a validation failure rather
/// than a deserialization one.
#[derive(Debug, Clone)]
pub struct NewLineItem {
    /// Catalog product ID
    pub product_id: String,
    /// Requested unit count
    pub quantity: i64,
}

// =============================================================================
// Order Workflow
// =============================================================================

/// Orchestrates order creation, retrieval, and status updates.
pub struct OrderWorkflow<C: ProductCatalog, S: OrderStore> {
    /// Product catalog for line item enrichment
    catalog: Arc<C>,
    /// Order persistence
    store: Arc<S>,
}

impl<C: ProductCatalog, S: OrderStore> OrderWorkflow<C, S> {
    /// Create a new workflow over the given catalog and store.
    pub fn new(catalog: Arc<C>, store: Arc<S>) -> Self {
        Self { catalog, store }
    }

    /// Create a new order.
    ///
    /// Validates the request, enriches every line item from the product
    /// catalog (lookups run concurrently and the first failure aborts),
    /// computes the total, and persists the order with status `Pending`.
    /// Nothing is persisted when validation or any lookup fails.
    ///
    /// # Errors
    /// - [`WorkflowError::Validation`] for empty or invalid input
    /// - [`WorkflowError::ProductNotFound`] when a referenced product does
    ///   not exist in the catalog
    /// - [`WorkflowError::Lookup`] when the product service fails
    /// - [`WorkflowError::Store`] when persistence fails
    pub async fn create_order(
        &self,
        customer_id: Option<String>,
        items: Vec<NewLineItem>,
    ) -> Result<Order, WorkflowError> {
        // Validate everything before any I/O
        if items.is_empty() {
            return Err(WorkflowError::Validation(
                "Order must contain at least one item".to_string(),
            ));
        }
        let mut requested = Vec::with_capacity(items.len());
        for item in &items {
            if item.product_id.is_empty() {
                return Err(WorkflowError::Validation(
                    "Line item product ID must not be empty".to_string(),
                ));
            }
            let quantity = Quantity::from_i64(item.quantity)
                .map_err(|e| WorkflowError::Validation(e.to_string()))?;
            requested.push((item.product_id.clone(), quantity));
        }

        // Fetch product details concurrently; one failure aborts the order
        debug!(item_count = requested.len(), "Fetching product details");
        let lookups = requested
            .iter()
            .map(|(product_id, _)| self.catalog.fetch_product(product_id));
        let products = try_join_all(lookups).await.map_err(|e| match e {
            LookupError::NotFound { product_id } => WorkflowError::ProductNotFound { product_id },
            other => WorkflowError::Lookup(other),
        })?;

        // Enriched items keep the caller's order
        let line_items: Vec<LineItem> = requested
            .into_iter()
            .zip(products)
            .map(|((product_id, quantity), product)| LineItem {
                product_id,
                name: product.name,
                price: product.price,
                description: product.description,
                category: product.category,
                quantity,
            })
            .collect();

        let order = Order::new(customer_id, line_items);
        info!(
            order_id = %order.order_id,
            item_count = order.items.len(),
            total_price = %order.total_price,
            "Creating order"
        );

        Ok(self.store.create(&order).await?)
    }

    /// List every persisted order.
    pub async fn list_orders(&self) -> Result<Vec<Order>, WorkflowError> {
        Ok(self.store.find_all().await?)
    }

    /// Fetch one order; `Ok(None)` when it does not exist.
    pub async fn get_order(&self, order_id: OrderId) -> Result<Option<Order>, WorkflowError> {
        Ok(self.store.find_by_id(order_id).await?)
    }

    /// Set a new status on an order; `Ok(None)` when it does not exist.
    ///
    /// Any status may replace any other. The store refreshes `updated_at`
    /// in the same round trip.
    pub async fn update_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, WorkflowError> {
        info!(%order_id, %status, "Updating order status");
        Ok(self.store.update_status(order_id, status).await?)
    }
}

// =============================================================================
// Tests
// =============================================================================
