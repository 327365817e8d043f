//! OMS Order Workflow
//!
//! Use-case layer orchestrating the order lifecycle across the product
//! catalog and the order store:
//!
//! - **Create**: validate input, enrich line items from the catalog,
//!   compute the total, persist as `Pending`.
//! - **Read**: list all orders or fetch one by ID.
//! - **Update**: set a new lifecycle status.
//!
//! The workflow holds no state of its own. It is generic over the catalog
//! and store ports and reloads from the store on every operation.

#![warn(clippy::all)]

pub mod error;
pub mod order_workflow;

pub use error::WorkflowError;
pub use order_workflow::{NewLineItem, OrderWorkflow};
