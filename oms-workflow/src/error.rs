//! Workflow error types.

use oms_connectors::LookupError;
use oms_store::StoreError;
use thiserror::Error;

/// Errors raised by order workflow operations.
///
/// `Validation` and `ProductNotFound` are caller faults; `Lookup` and
/// `Store` are infrastructure faults. The API layer is the only place that
/// maps these kinds to HTTP statuses.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Input rejected before any I/O
    #[error("{0}")]
    Validation(String),

    /// A referenced product does not exist in the catalog
    #[error("Product not found: {product_id}")]
    ProductNotFound { product_id: String },

    /// Product service unreachable, erroring, or returning bad data
    #[error("Product lookup failed: {0}")]
    Lookup(#[source] LookupError),

    /// Order store failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
