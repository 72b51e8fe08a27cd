//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure is returned as a value; nothing panics across the
/// pricing/aggregate boundary, so the calling UI can render a precise
/// message per failed line item instead of aborting the whole cart.
/// Serializable because per-line failures travel to the UI alongside the
/// partial totals.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    /// Requested quantity exceeds current availability. Carries the maximum
    /// the shopper may still order so the UI can show it.
    #[error("out of stock: requested {requested}, only {available} available")]
    OutOfStock { requested: u32, available: u32 },

    /// Accessory or warranty tier does not belong to the product. Usually
    /// stale client state; recoverable by refetching the product.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// The referenced product no longer exists in the catalog. The shopper
    /// should remove the line item.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// Discounts exceed the base price. Fatal for that product's pricing;
    /// never silently produces a negative price.
    #[error("invalid pricing data: {0}")]
    InvalidPricingData(String),

    /// A value failed validation (e.g. zero quantity on creation).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn out_of_stock(requested: u32, available: u32) -> Self {
        Self::OutOfStock {
            requested,
            available,
        }
    }

    pub fn invalid_selection(msg: impl Into<String>) -> Self {
        Self::InvalidSelection(msg.into())
    }

    pub fn product_not_found(id: ProductId) -> Self {
        Self::ProductNotFound(id)
    }

    pub fn invalid_pricing(msg: impl Into<String>) -> Self {
        Self::InvalidPricingData(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_stock_message_reports_max_allowed() {
        let err = DomainError::out_of_stock(5, 3);
        assert_eq!(
            err.to_string(),
            "out of stock: requested 5, only 3 available"
        );
    }

    #[test]
    fn errors_compare_by_value() {
        assert_eq!(
            DomainError::invalid_selection("warranty tier 3yr"),
            DomainError::InvalidSelection("warranty tier 3yr".to_string())
        );
    }
}
