//! PostgreSQL order store.
//!
//! Orders persist as one row each, with the line items in a single JSONB
//! document column. Schema lives in the workspace `migrations/` directory.
//!
//! This module uses dynamic queries (sqlx::query) instead of compile-time
//! checked macros (sqlx::query!) to allow compilation without DATABASE_URL.

use crate::error::StoreError;
use crate::repository::OrderStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use oms_domain::{LineItem, Order, OrderId, OrderStatus};
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// PostgreSQL-backed order store
pub struct PgOrderStore {
    /// PostgreSQL connection pool
    pool: Arc<PgPool>,
}

impl PgOrderStore {
    /// Create a store around an existing connection pool
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Connect to the database and create a store with its own pool
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to connect to database: {}", e)))?;

        debug!("connected to order database");
        Ok(Self::new(Arc::new(pool)))
    }

    /// Get a reference to the underlying pool (for testing)
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Row struct for orders query results.
///
/// Mirrors the orders table schema in migrations.
#[derive(Debug)]
struct OrderRow {
    order_id: Uuid,
    customer_id: Option<String>,
    items: serde_json::Value,
    total_price: Decimal,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Helper function to parse a row from an orders query.
fn parse_order_row(row: &sqlx::postgres::PgRow) -> Result<OrderRow, sqlx::Error> {
    Ok(OrderRow {
        order_id: row.try_get("order_id")?,
        customer_id: row.try_get("customer_id")?,
        items: row.try_get("items")?,
        total_price: row.try_get("total_price")?,
        status: row.try_get("status")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// Rebuild the domain order from a parsed row.
fn row_to_order(row: OrderRow) -> Result<Order, StoreError> {
    let items: Vec<LineItem> = serde_json::from_value(row.items)
        .map_err(|e| StoreError::Deserialization(format!("Invalid items document: {}", e)))?;

    let status = row
        .status
        .parse::<OrderStatus>()
        .map_err(|e| StoreError::Deserialization(format!("Invalid status {}: {}", row.status, e)))?;

    Ok(Order {
        order_id: row.order_id,
        customer_id: row.customer_id,
        items,
        total_price: row.total_price,
        status,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn create(&self, order: &Order) -> Result<Order, StoreError> {
        let items = serde_json::to_value(&order.items)
            .map_err(|e| StoreError::Serialization(format!("Cannot serialize items: {}", e)))?;

        let row = sqlx::query(
            r#"
            INSERT INTO orders (
                order_id, customer_id, items, total_price, status, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING order_id, customer_id, items, total_price, status, created_at, updated_at
            "#,
        )
        .bind(order.order_id)
        .bind(&order.customer_id)
        .bind(&items)
        .bind(order.total_price)
        .bind(order.status.name())
        .bind(order.created_at)
        .bind(order.updated_at)
        .fetch_one(&*self.pool)
        .await?;

        let parsed = parse_order_row(&row)
            .map_err(|e| StoreError::Database(format!("Failed to parse row: {}", e)))?;
        row_to_order(parsed)
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT order_id, customer_id, items, total_price, status, created_at, updated_at
            FROM orders
            WHERE order_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await?;

        match row {
            Some(row) => {
                let parsed = parse_order_row(&row)
                    .map_err(|e| StoreError::Database(format!("Failed to parse row: {}", e)))?;
                Ok(Some(row_to_order(parsed)?))
            },
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Order>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT order_id, customer_id, items, total_price, status, created_at, updated_at
            FROM orders
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            let parsed = parse_order_row(&row)
                .map_err(|e| StoreError::Database(format!("Failed to parse row: {}", e)))?;
            orders.push(row_to_order(parsed)?);
        }

        Ok(orders)
    }

    async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, StoreError> {
        let row = sqlx::query(
            r#"
            UPDATE orders
            SET status = $2, updated_at = NOW()
            WHERE order_id = $1
            RETURNING order_id, customer_id, items, total_price, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(status.name())
        .fetch_optional(&*self.pool)
        .await?;

        match row {
            Some(row) => {
                let parsed = parse_order_row(&row)
                    .map_err(|e| StoreError::Database(format!("Failed to parse row: {}", e)))?;
                Ok(Some(row_to_order(parsed)?))
            },
            None => {
                debug!(order_id = %id, "status update for unknown order");
                Ok(None)
            },
        }
    }
}
