//! Daemon: Main runtime orchestrator.
//!
//! The Daemon wires the order workflow to its ports and runs the API server:
//! - Product catalog (REST client against the product service, stub in tests)
//! - Order store (in-memory by default, PostgreSQL behind the `postgres`
//!   feature)
//! - API server (HTTP endpoints)
//!
//! # Lifecycle
//!
//! 1. Load configuration
//! 2. Wire catalog, store, and workflow
//! 3. Start API server
//! 4. Block until shutdown is requested (SIGINT), then drain in-flight
//!    requests before exiting

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

use oms_connectors::{ProductCatalog, ProductRestClient, StubCatalog};
use oms_store::{MemoryOrderStore, OrderStore};
use oms_workflow::OrderWorkflow;

use crate::api::{create_router, ApiState};
use crate::config::Config;
use crate::error::{DaemonError, DaemonResult};

#[cfg(feature = "postgres")]
use crate::config::StoreConfig;
#[cfg(feature = "postgres")]
use oms_store::PgOrderStore;

// =============================================================================
// Daemon
// =============================================================================

/// The main OMS daemon.
pub struct Daemon<C: ProductCatalog + 'static, S: OrderStore + 'static> {
    /// Configuration
    config: Config,
    /// Order workflow
    workflow: Arc<OrderWorkflow<C, S>>,
}

impl Daemon<StubCatalog, MemoryOrderStore> {
    /// Create a new daemon with stub components (for testing).
    pub fn new_stub(config: Config) -> Self {
        let catalog = Arc::new(StubCatalog::new());
        let store = Arc::new(MemoryOrderStore::new());
        let workflow = Arc::new(OrderWorkflow::new(catalog, store));

        Self { config, workflow }
    }
}

impl Daemon<ProductRestClient, MemoryOrderStore> {
    /// Create a new daemon with the REST product client and the in-memory
    /// store.
    pub fn new_memory(config: Config) -> Self {
        let catalog = Arc::new(ProductRestClient::new(
            config.product_service.base_url.clone(),
        ));
        let store = Arc::new(MemoryOrderStore::new());
        let workflow = Arc::new(OrderWorkflow::new(catalog, store));

        Self { config, workflow }
    }
}

#[cfg(feature = "postgres")]
impl Daemon<ProductRestClient, PgOrderStore> {
    /// Create a new daemon with the REST product client and the PostgreSQL
    /// store.
    pub async fn new_postgres(config: Config) -> DaemonResult<Self> {
        let database_url = match &config.store {
            StoreConfig::Postgres { database_url } => database_url.clone(),
            StoreConfig::Memory => {
                return Err(DaemonError::Config(
                    "Postgres daemon requires OMS_STORE_BACKEND=postgres".to_string(),
                ))
            }
        };

        let catalog = Arc::new(ProductRestClient::new(
            config.product_service.base_url.clone(),
        ));
        let store = Arc::new(PgOrderStore::connect(&database_url).await?);
        let workflow = Arc::new(OrderWorkflow::new(catalog, store));

        Ok(Self { config, workflow })
    }
}

impl<C: ProductCatalog + 'static, S: OrderStore + 'static> Daemon<C, S> {
    /// Create a new daemon with a prewired workflow.
    pub fn new(config: Config, workflow: Arc<OrderWorkflow<C, S>>) -> Self {
        Self { config, workflow }
    }

    /// Run the daemon.
    ///
    /// This method blocks until shutdown is requested (SIGINT) and the
    /// server has drained its in-flight requests.
    pub async fn run(self) -> DaemonResult<()> {
        info!(
            version = env!("CARGO_PKG_VERSION"),
            environment = %self.config.environment,
            "Starting OMS daemon"
        );

        let (api_addr, server) = self
            .start_api_server(async {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => info!("Received shutdown signal"),
                    Err(e) => error!(error = %e, "Shutdown signal handler failed"),
                }
            })
            .await?;
        info!(%api_addr, "API server started");

        // Resolves once the signal fires and in-flight requests have drained
        if let Err(e) = server.await {
            error!(error = %e, "API server task failed");
        }

        self.shutdown().await?;

        Ok(())
    }

    /// Start the API server.
    ///
    /// The server accepts connections until `shutdown` resolves, then
    /// drains in-flight requests before the returned task completes.
    async fn start_api_server<F>(&self, shutdown: F) -> DaemonResult<(SocketAddr, JoinHandle<()>)>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let state = Arc::new(ApiState {
            workflow: self.workflow.clone(),
        });

        let router = create_router(state);
        let addr = format!("{}:{}", self.config.api.host, self.config.api.port);

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| DaemonError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

        let local_addr = listener
            .local_addr()
            .map_err(|e| DaemonError::Config(format!("Failed to get local address: {}", e)))?;

        // Spawn the server task
        let server = tokio::spawn(async move {
            let serve = axum::serve(listener, router).with_graceful_shutdown(shutdown);
            if let Err(e) = serve.await {
                error!(error = %e, "API server error");
            }
        });

        Ok((local_addr, server))
    }

    /// Graceful shutdown.
    async fn shutdown(&self) -> DaemonResult<()> {
        info!("Initiating graceful shutdown");

        let orders = self.workflow.list_orders().await?;
        info!(order_count = orders.len(), "Shutdown complete");

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_daemon_stub_creation() {
        let config = Config::test();
        let daemon = Daemon::new_stub(config);

        // Fresh daemon has no orders
        let orders = daemon.workflow.list_orders().await.unwrap();
        assert!(orders.is_empty());
    }

    #[tokio::test]
    async fn test_daemon_api_server_start() {
        let config = Config::test();
        let daemon = Daemon::new_stub(config);

        let (addr, _server) = daemon
            .start_api_server(std::future::pending::<()>())
            .await
            .unwrap();

        // Server should be running on a port
        assert!(addr.port() > 0);

        // Can make a health check request
        let client = reqwest::Client::new();
        let response = client
            .get(format!("http://{}/health-check", addr))
            .send()
            .await
            .unwrap();

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "Health check passed");
    }

    #[tokio::test]
    async fn test_daemon_api_server_graceful_shutdown() {
        let config = Config::test();
        let daemon = Daemon::new_stub(config);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        let (addr, server) = daemon
            .start_api_server(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();

        // Server answers while running
        let client = reqwest::Client::new();
        let response = client
            .get(format!("http://{}/health-check", addr))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());

        // Signal shutdown and wait for the server task to finish draining
        shutdown_tx.send(()).unwrap();
        server.await.unwrap();

        // The listener is closed afterwards; a fresh connection is refused
        let refused = reqwest::Client::new()
            .get(format!("http://{}/health-check", addr))
            .send()
            .await;
        assert!(refused.is_err());
    }

    #[tokio::test]
    async fn test_daemon_shutdown_with_empty_store() {
        let config = Config::test();
        let daemon = Daemon::new_stub(config);

        // Should not fail with an empty store
        daemon.shutdown().await.unwrap();
    }
}
