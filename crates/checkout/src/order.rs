use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_cart::{Cart, LineItem};
use storefront_core::{DomainError, DomainResult};

use crate::totals::{OrderTotals, TotalsReport};

/// Days between order placement and the estimated delivery date.
pub const DELIVERY_LEAD_DAYS: i64 = 14;

/// The value handed to the order-placement collaborator: the cart's line
/// items, the computed totals, a confirmation number and an estimated
/// delivery date. Submitting it (REST call) is outside this engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub lines: Vec<LineItem>,
    pub totals: OrderTotals,
    pub confirmation_number: String,
    pub placed_at: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
}

impl OrderDraft {
    /// Build an order draft from a cart and its totals report.
    ///
    /// Fails with `Validation` when the cart is empty or when any line could
    /// not be priced; the shopper must resolve per-line failures before
    /// placing the order.
    pub fn new(cart: &Cart, report: &TotalsReport) -> DomainResult<Self> {
        if cart.is_empty() {
            return Err(DomainError::validation("cannot place an order for an empty cart"));
        }
        if !report.is_clean() {
            return Err(DomainError::validation(format!(
                "{} line(s) could not be priced; resolve them before placing the order",
                report.failures.len()
            )));
        }

        let placed_at = Utc::now();
        Ok(Self {
            lines: cart.items().to_vec(),
            totals: report.totals.clone(),
            confirmation_number: confirmation_number(),
            placed_at,
            estimated_delivery: placed_at + Duration::days(DELIVERY_LEAD_DAYS),
        })
    }
}

/// Six-digit, zero-padded confirmation number derived from a fresh UUIDv7.
fn confirmation_number() -> String {
    let n = Uuid::now_v7().as_u128() % 1_000_000;
    format!("{n:06}")
}
