//! OMS External Connectors
//!
//! Adapters for the external services the order workflow depends on.
//! Normalizes service payloads to domain types.

#![warn(clippy::all)]

// Public modules
pub mod catalog;
pub mod error;
pub mod product_rest;
pub mod stub;

// Re-exports
pub use catalog::{ProductCatalog, ProductDetails};
pub use error::LookupError;
pub use product_rest::ProductRestClient;
pub use stub::StubCatalog;
