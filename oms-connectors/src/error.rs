//! Product lookup errors

use thiserror::Error;

/// Errors that can occur when looking up products in the catalog.
///
/// `NotFound` is the only class callers treat specially; the rest are
/// upstream failures that abort the enclosing operation. None are retried.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    /// The catalog has no product with this ID
    #[error("Product not found: {product_id}")]
    NotFound {
        /// The product ID that was requested
        product_id: String,
    },

    /// HTTP request failed (transport-level)
    #[error("Product service request failed: {0}")]
    RequestFailed(String),

    /// Product service answered with a non-success status
    #[error("Product service returned HTTP {status}")]
    Status {
        /// The HTTP status code returned
        status: u16,
    },

    /// Failed to parse or validate the response payload
    #[error("Failed to parse product response: {0}")]
    ParseError(String),

    /// Request timed out
    #[error("Product lookup timed out")]
    Timeout,
}
