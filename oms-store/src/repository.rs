//! Storage port definition
//!
//! This trait defines the storage interface for orders.
//! Implementations can be PostgreSQL or in-memory; the workflow only ever
//! sees this contract, and the backend is selected at startup.

use crate::error::StoreError;
use async_trait::async_trait;
use oms_domain::{Order, OrderId, OrderStatus};

/// Storage port for Order entities
///
/// Each operation is a single round trip against the backing store; there is
/// no caching and no cross-operation transaction. Absence is signalled with
/// `None`, never with an error.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a new order and return the record as stored
    async fn create(&self, order: &Order) -> Result<Order, StoreError>;

    /// Find an order by ID
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError>;

    /// Load every persisted order (no pagination, store-defined order)
    async fn find_all(&self) -> Result<Vec<Order>, StoreError>;

    /// Set a new status and refresh the update timestamp
    ///
    /// Returns the updated record, or `None` when no order has this ID.
    /// Items and total price are never touched.
    async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, StoreError>;
}
