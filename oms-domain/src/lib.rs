//! OMS Domain Layer
//!
//! Pure domain logic with zero I/O dependencies.
//! Contains the order aggregate, value objects, and lifecycle rules.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{LineItem, Order, OrderId, OrderStatus};
pub use value_objects::{DomainError, Price, Quantity};
