//! OMS Daemon
//!
//! Order management service: HTTP API, order workflow, product enrichment,
//! and pluggable order storage.
//!
//! # Usage
//!
//! ```bash
//! # Start with default configuration (in-memory store)
//! cargo run -p omsd
//!
//! # Start against PostgreSQL
//! OMS_STORE_BACKEND=postgres DATABASE_URL=postgres://... \
//!     cargo run -p omsd --features postgres
//!
//! # Apply database migrations
//! cargo run -p omsd --features postgres -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `OMS_ENV`: Environment (test, development, production)
//! - `OMS_API_HOST`: API host (default: 0.0.0.0)
//! - `OMS_API_PORT`: API port (default: 3000)
//! - `OMS_PRODUCT_SERVICE_URL`: Product service base URL
//!   (default: http://ms-product:8080)
//! - `OMS_STORE_BACKEND`: Order store backend (memory, postgres)
//! - `DATABASE_URL`: PostgreSQL connection string (postgres backend only)

use omsd::{Config, Daemon, StoreConfig};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("omsd=info".parse()?))
        .init();

    // Database subcommands bypass the daemon entirely
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "db" {
        #[cfg(feature = "postgres")]
        return omsd::db::run_db_command(args).await;

        #[cfg(not(feature = "postgres"))]
        anyhow::bail!("db commands require building with --features postgres");
    }

    // Load configuration
    let config = Config::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        api_host = %config.api.host,
        api_port = config.api.port,
        "OMS Daemon"
    );

    // Create and run daemon on the configured store backend
    if matches!(config.store, StoreConfig::Postgres { .. }) {
        #[cfg(feature = "postgres")]
        {
            let daemon = Daemon::new_postgres(config).await?;
            daemon.run().await?;
        }

        #[cfg(not(feature = "postgres"))]
        anyhow::bail!("OMS_STORE_BACKEND=postgres requires building with --features postgres");
    } else {
        let daemon = Daemon::new_memory(config);
        daemon.run().await?;
    }

    Ok(())
}
