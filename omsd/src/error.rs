//! Daemon error types.

use oms_store::StoreError;
use oms_workflow::WorkflowError;
use thiserror::Error;

/// Daemon-level errors.
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Workflow error
    #[error("Workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for daemon operations.
pub type DaemonResult<T> = Result<T, DaemonError>;
