//! Domain Entities for OMS
//!
//! Core business entities with lifecycle management.
//! Orders are created once, read many times, and mutated only through
//! status updates.

use crate::value_objects::{DomainError, Price, Quantity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// =============================================================================
// Order ID
// =============================================================================

/// Unique identifier for an Order
pub type OrderId = Uuid;

// =============================================================================
// Order
// =============================================================================

/// Order represents a customer order with enriched line items
///
/// Key concepts:
/// - `items` and `total_price` are fixed at creation and never recomputed,
///   not even when the status changes
/// - `total_price` is the sum of unit price × quantity over all line items
/// - Orders are never deleted; the lifecycle ends with the record still stored
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: OrderId,
    pub customer_id: Option<String>,
    pub items: Vec<LineItem>,
    pub total_price: rust_decimal::Decimal,
    pub status: OrderStatus,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Create a new pending order from enriched line items
    ///
    /// The total price is computed here, once. Both timestamps are set to
    /// the same instant.
    pub fn new(customer_id: Option<String>, items: Vec<LineItem>) -> Self {
        let now = Utc::now();
        let total_price = items.iter().map(LineItem::subtotal).sum();
        Self {
            order_id: Uuid::now_v7(),
            customer_id,
            items,
            total_price,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set a new status and refresh the update timestamp
    ///
    /// Any status can be set from any other: the lifecycle has no enforced
    /// transition graph and no terminal state.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A single order line: the caller-supplied product reference and quantity,
/// plus the product details captured from the catalog at creation time
///
/// `category` is a passthrough label owned by the product catalog; this
/// service stores it without validating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: String,
    pub name: String,
    pub price: Price,
    pub description: String,
    pub category: String,
    pub quantity: Quantity,
}

impl LineItem {
    /// Line subtotal: unit price × quantity
    pub fn subtotal(&self) -> rust_decimal::Decimal {
        self.price.as_decimal() * self.quantity.as_decimal()
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Order lifecycle status
///
/// Flat value set with no transition rules: any status may be set from any
/// other, and none is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Default status for newly created orders
    Pending,
    /// Accepted for preparation
    Confirmed,
    /// Preparation underway
    Preparing,
    /// Ready for pickup or delivery
    Ready,
    /// Handed to the customer
    Delivered,
    /// Cancelled by the customer or the operator
    Cancelled,
}

impl OrderStatus {
    /// Every valid status, in lifecycle order
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Get the wire name of the status (e.g. "PENDING")
    pub fn name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Ready => "READY",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    /// Parse a wire status name; matching is exact (uppercase)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(OrderStatus::Pending),
            "CONFIRMED" => Ok(OrderStatus::Confirmed),
            "PREPARING" => Ok(OrderStatus::Preparing),
            "READY" => Ok(OrderStatus::Ready),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            other => Err(DomainError::InvalidStatus(format!(
                "Unknown order status: {}",
                other
            ))),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
