//! Value Objects for the OMS Domain
//!
//! Immutable, validated domain primitives.
//! All value objects enforce invariants at construction time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Domain errors for value object and entity validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Price must not be negative
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Quantity must be a positive integer
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Status string is not one of the known lifecycle values
    #[error("Invalid status: {0}")]
    InvalidStatus(String),
}

// =============================================================================
// Price
// =============================================================================

/// Price represents a non-negative unit price in the catalog currency
///
/// # Invariants
/// - Must be >= 0 (a zero price is a valid promotional item; negative
///   catalog payloads are rejected)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price(Decimal);

impl Price {
    /// Create a new Price with validation
    ///
    /// # Examples
    /// ```
    /// # use oms_domain::value_objects::Price;
    /// # use rust_decimal_macros::dec;
    /// assert!(Price::new(dec!(10.5)).is_ok());
    /// assert!(Price::new(dec!(-1)).is_err());
    /// ```
    ///
    /// # Errors
    /// Returns `DomainError::InvalidPrice` if value < 0
    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        if value < Decimal::ZERO {
            return Err(DomainError::InvalidPrice("Price must not be negative".to_string()));
        }
        Ok(Self(value))
    }

    /// Get the underlying Decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Create a zero price
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Quantity
// =============================================================================

/// Quantity represents a positive whole number of units
///
/// # Invariants
/// - Must be > 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Quantity(u32);

impl Quantity {
    /// Create a new Quantity with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidQuantity` if value is 0
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::InvalidQuantity("Quantity must be positive".to_string()));
        }
        Ok(Self(value))
    }

    /// Create a Quantity from an untrusted wire integer
    ///
    /// # Errors
    /// Returns `DomainError::InvalidQuantity` if value is not a positive
    /// integer that fits in u32
    pub fn from_i64(value: i64) -> Result<Self, DomainError> {
        let value = u32::try_from(value).map_err(|_| {
            DomainError::InvalidQuantity(format!("Quantity out of range: {}", value))
        })?;
        Self::new(value)
    }

    /// Get the underlying unit count
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Get the quantity as a Decimal (for price arithmetic)
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // Price tests
    #[test]
    fn test_price_validation() {
        assert!(Price::new(dec!(100.0)).is_ok());
        assert!(Price::new(dec!(0.01)).is_ok());
        assert!(Price::new(dec!(0)).is_ok());
        assert!(Price::new(dec!(-1.0)).is_err());
    }

    #[test]
    fn test_price_as_decimal() {
        let price = Price::new(dec!(12.75)).unwrap();
        assert_eq!(price.as_decimal(), dec!(12.75));
    }

    #[test]
    fn test_price_zero() {
        assert_eq!(Price::zero().as_decimal(), Decimal::ZERO);
    }

    #[test]
    fn test_price_serializes_as_decimal_string() {
        let price = Price::new(dec!(10.5)).unwrap();
        let json = serde_json::to_value(price).unwrap();
        assert_eq!(json, "10.5");

        // Catalog payloads may carry numbers instead of strings
        let from_number: Price = serde_json::from_str("10.5").unwrap();
        assert_eq!(from_number.as_decimal(), dec!(10.5));
    }

    // Quantity tests
    #[test]
    fn test_quantity_validation() {
        assert!(Quantity::new(1).is_ok());
        assert!(Quantity::new(100).is_ok());
        assert!(Quantity::new(0).is_err());
    }

    #[test]
    fn test_quantity_from_i64() {
        assert_eq!(Quantity::from_i64(5).unwrap().as_u32(), 5);
        assert!(Quantity::from_i64(0).is_err());
        assert!(Quantity::from_i64(-3).is_err());
        assert!(Quantity::from_i64(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_quantity_as_decimal() {
        let quantity = Quantity::new(4).unwrap();
        assert_eq!(quantity.as_decimal(), dec!(4));
    }
}
