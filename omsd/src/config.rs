//! Daemon configuration.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::error::{DaemonError, DaemonResult};
use std::env;

// =============================================================================
// Configuration
// =============================================================================

/// Daemon configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Product service configuration
    pub product_service: ProductServiceConfig,

    /// Order store backend selection
    pub store: StoreConfig,

    /// Environment (test, development, production)
    pub environment: Environment,
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
}

/// Product service configuration.
#[derive(Debug, Clone)]
pub struct ProductServiceConfig {
    /// Base URL of the product service
    pub base_url: String,
}

/// Order store backend.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    /// In-memory store (default)
    Memory,
    /// PostgreSQL store (requires the `postgres` feature)
    Postgres {
        /// Connection string
        database_url: String,
    },
}

/// Environment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Test environment (uses stubs)
    Test,
    /// Development environment
    Development,
    /// Production environment
    Production,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> DaemonResult<Self> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let environment = Self::load_environment()?;
        let api = Self::load_api_config()?;
        let product_service = Self::load_product_service_config();
        let store = Self::load_store_config()?;

        Ok(Self {
            api,
            product_service,
            store,
            environment,
        })
    }

    /// Create test configuration.
    pub fn test() -> Self {
        Self {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Let OS assign port
            },
            product_service: ProductServiceConfig {
                base_url: "http://localhost:8080".to_string(),
            },
            store: StoreConfig::Memory,
            environment: Environment::Test,
        }
    }

    fn load_environment() -> DaemonResult<Environment> {
        let env_str = env::var("OMS_ENV").unwrap_or_else(|_| "development".to_string());

        match env_str.to_lowercase().as_str() {
            "test" => Ok(Environment::Test),
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(DaemonError::Config(format!(
                "Invalid OMS_ENV: {}. Expected: test, development, production",
                other
            ))),
        }
    }

    fn load_api_config() -> DaemonResult<ApiConfig> {
        let host = env::var("OMS_API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port_str = env::var("OMS_API_PORT").unwrap_or_else(|_| "3000".to_string());

        let port = port_str
            .parse::<u16>()
            .map_err(|_| DaemonError::Config(format!("Invalid OMS_API_PORT: {}", port_str)))?;

        Ok(ApiConfig { host, port })
    }

    fn load_product_service_config() -> ProductServiceConfig {
        let base_url = env::var("OMS_PRODUCT_SERVICE_URL")
            .unwrap_or_else(|_| "http://ms-product:8080".to_string());

        ProductServiceConfig { base_url }
    }

    fn load_store_config() -> DaemonResult<StoreConfig> {
        let backend = env::var("OMS_STORE_BACKEND").unwrap_or_else(|_| "memory".to_string());

        match backend.to_lowercase().as_str() {
            "memory" => Ok(StoreConfig::Memory),
            "postgres" => {
                let database_url = env::var("DATABASE_URL").map_err(|_| {
                    DaemonError::Config(
                        "DATABASE_URL is required when OMS_STORE_BACKEND=postgres".to_string(),
                    )
                })?;
                Ok(StoreConfig::Postgres { database_url })
            }
            other => Err(DaemonError::Config(format!(
                "Invalid OMS_STORE_BACKEND: {}. Expected: memory, postgres",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            product_service: ProductServiceConfig {
                base_url: "http://ms-product:8080".to_string(),
            },
            store: StoreConfig::Memory,
            environment: Environment::Development,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Test => write!(f, "test"),
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.api.port, 3000);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.product_service.base_url, "http://ms-product:8080");
        assert!(matches!(config.store, StoreConfig::Memory));
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test();

        assert_eq!(config.api.port, 0);
        assert_eq!(config.environment, Environment::Test);
        assert!(matches!(config.store, StoreConfig::Memory));
    }

    #[test]
    fn test_environment_display() {
        assert_eq!(Environment::Test.to_string(), "test");
        assert_eq!(Environment::Development.to_string(), "development");
        assert_eq!(Environment::Production.to_string(), "production");
    }
}
