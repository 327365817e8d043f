//! In-memory store implementation
//!
//! A plain key-value table used for testing and development without a
//! database. Thread-safe using RwLock for concurrent access; concurrent
//! status updates resolve last-write-wins under the write lock.

use crate::error::StoreError;
use crate::repository::OrderStore;
use async_trait::async_trait;
use oms_domain::{Order, OrderId, OrderStatus};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory order store
pub struct MemoryOrderStore {
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl MemoryOrderStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self { orders: RwLock::new(HashMap::new()) }
    }

    /// Get the number of stored orders
    pub fn order_count(&self) -> usize {
        self.orders.read().unwrap().len()
    }

    /// Clear all data (useful for test setup)
    pub fn clear(&self) {
        self.orders.write().unwrap().clear();
    }
}

impl Default for MemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn create(&self, order: &Order) -> Result<Order, StoreError> {
        let mut orders = self.orders.write().unwrap();
        orders.insert(order.order_id, order.clone());
        Ok(order.clone())
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        let orders = self.orders.read().unwrap();
        Ok(orders.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Order>, StoreError> {
        let orders = self.orders.read().unwrap();
        Ok(orders.values().cloned().collect())
    }

    async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, StoreError> {
        let mut orders = self.orders.write().unwrap();
        match orders.get_mut(&id) {
            Some(order) => {
                order.set_status(status);
                Ok(Some(order.clone()))
            },
            None => Ok(None),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use oms_domain::{LineItem, Price, Quantity};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn create_test_order() -> Order {
        let items = vec![
            LineItem {
                product_id: "p-1".to_string(),
                name: "Margherita".to_string(),
                price: Price::new(dec!(25)).unwrap(),
                description: "Tomato and mozzarella".to_string(),
                category: "Food".to_string(),
                quantity: Quantity::new(2).unwrap(),
            },
            LineItem {
                product_id: "p-2".to_string(),
                name: "Lemonade".to_string(),
                price: Price::new(dec!(4.5)).unwrap(),
                description: "Fresh squeezed".to_string(),
                category: "Beverage".to_string(),
                quantity: Quantity::new(1).unwrap(),
            },
        ];
        Order::new(Some("customer-1".to_string()), items)
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = MemoryOrderStore::new();
        let order = create_test_order();
        let id = order.order_id;

        store.create(&order).await.unwrap();

        let found = store.find_by_id(id).await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().order_id, id);
    }

    #[tokio::test]
    async fn test_create_returns_stored_record() {
        let store = MemoryOrderStore::new();
        let order = create_test_order();

        let stored = store.create(&order).await.unwrap();

        assert_eq!(stored.order_id, order.order_id);
        assert_eq!(stored.total_price, dec!(54.5));
        assert_eq!(stored.items.len(), 2);
        assert_eq!(stored.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_returns_none() {
        let store = MemoryOrderStore::new();
        let found = store.find_by_id(Uuid::now_v7()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_all_empty() {
        let store = MemoryOrderStore::new();
        let all = store.find_all().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_find_all_returns_every_order() {
        let store = MemoryOrderStore::new();

        store.create(&create_test_order()).await.unwrap();
        store.create(&create_test_order()).await.unwrap();
        store.create(&create_test_order()).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(store.order_count(), 3);
    }

    #[tokio::test]
    async fn test_update_status() {
        let store = MemoryOrderStore::new();
        let order = create_test_order();
        let id = order.order_id;
        store.create(&order).await.unwrap();

        std::thread::sleep(std::time::Duration::from_millis(2));
        let updated = store.update_status(id, OrderStatus::Preparing).await.unwrap();

        let updated = updated.expect("order should exist");
        assert_eq!(updated.status, OrderStatus::Preparing);
        assert!(updated.updated_at > order.updated_at);
        // Creation data is untouched
        assert_eq!(updated.total_price, order.total_price);
        assert_eq!(updated.items.len(), order.items.len());
        assert_eq!(updated.created_at, order.created_at);
    }

    #[tokio::test]
    async fn test_update_status_missing_returns_none() {
        let store = MemoryOrderStore::new();
        let result = store.update_status(Uuid::now_v7(), OrderStatus::Cancelled).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_clear() {
        let store = MemoryOrderStore::new();
        store.create(&create_test_order()).await.unwrap();
        assert_eq!(store.order_count(), 1);

        store.clear();
        assert_eq!(store.order_count(), 0);
    }
}
