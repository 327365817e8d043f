//! OMS Daemon Library
//!
//! Runtime for the order management service.
//!
//! # Architecture
//!
//! ```text
//! HTTP client → API Server → Order Workflow → Product Catalog (REST)
//!                                           → Order Store (memory | Postgres)
//! ```
//!
//! # Components
//!
//! - **Daemon**: runtime wiring and server lifecycle
//! - **API**: HTTP endpoints for order operations and health
//! - **Config**: environment-based configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use omsd::{Config, Daemon};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env().expect("Failed to load config");
//!     let daemon = Daemon::new_memory(config);
//!     daemon.run().await.expect("Daemon error");
//! }
//! ```

#![warn(clippy::all)]

pub mod api;
pub mod config;
pub mod daemon;
pub mod error;

#[cfg(feature = "postgres")]
pub mod db;

// Re-exports for convenience
pub use config::{ApiConfig, Config, Environment, ProductServiceConfig, StoreConfig};
pub use daemon::Daemon;
pub use error::{DaemonError, DaemonResult};
