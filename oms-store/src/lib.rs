//! OMS Storage Layer
//!
//! Provides persistence for orders behind a single storage port.
//!
//! # Architecture
//!
//! - **`OrderStore` trait**: defines the storage interface (port)
//! - **In-memory store**: key-value table for tests and development
//! - **PostgreSQL store**: production implementation (feature `postgres`)
//!
//! # Usage
//!
//! ```rust
//! use oms_store::{MemoryOrderStore, OrderStore};
//! use oms_domain::{LineItem, Order, Price, Quantity};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = MemoryOrderStore::new();
//!
//!     let items = vec![LineItem {
//!         product_id: "p-1".to_string(),
//!         name: "Margherita".to_string(),
//!         price: Price::new(dec!(25)).unwrap(),
//!         description: "Tomato and mozzarella".to_string(),
//!         category: "Food".to_string(),
//!         quantity: Quantity::new(2).unwrap(),
//!     }];
//!     let order = Order::new(Some("customer-1".to_string()), items);
//!     let stored = store.create(&order).await.unwrap();
//!
//!     println!("Order total: {}", stored.total_price);
//! }
//! ```

#![warn(clippy::all)]

// Modules
mod error;
mod memory;
#[cfg(feature = "postgres")]
mod postgres;
mod repository;

// Re-exports
pub use error::StoreError;
pub use memory::MemoryOrderStore;
#[cfg(feature = "postgres")]
pub use postgres::PgOrderStore;
pub use repository::OrderStore;
