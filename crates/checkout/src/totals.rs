use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use storefront_cart::{Cart, IdentityKey};
use storefront_catalog::ProductLookup;
use storefront_core::{DomainError, DomainResult, ValueObject, money};
use storefront_pricing::line_unit_total;

/// Subtotal/tax/total breakdown, computed fresh from a cart snapshot.
///
/// Values are unrounded; call [`OrderTotals::rounded`] at the presentation
/// boundary only, so rounding error never accumulates across line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl OrderTotals {
    pub fn zero() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            tax: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    /// Copy rounded to currency display precision (2 dp).
    pub fn rounded(&self) -> Self {
        Self {
            subtotal: money::to_display(self.subtotal),
            tax: money::to_display(self.tax),
            total: money::to_display(self.total),
        }
    }
}

impl ValueObject for OrderTotals {}

/// A line item that could not be priced, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineFailure {
    /// Position of the line in the cart at computation time.
    pub index: usize,
    pub key: IdentityKey,
    pub error: DomainError,
}

/// Outcome of a totals computation: the totals over every priceable line,
/// plus per-line errors for the rest.
///
/// A failing line never aborts the whole cart; the UI renders a precise
/// message next to it and still shows the partial total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsReport {
    pub totals: OrderTotals,
    pub failures: Vec<LineFailure>,
}

impl TotalsReport {
    /// Whether every line was priced.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Compute subtotal, tax and total for a cart.
///
/// Each line's product is resolved through `lookup` at computation time, so
/// deleted products surface as `ProductNotFound` on their line and stale
/// warranty tiers as `InvalidSelection`. `tax_rate` is supplied by the
/// caller (region-dependent) and must lie in `[0, 1]`.
pub fn compute_totals(
    cart: &Cart,
    lookup: &impl ProductLookup,
    tax_rate: Decimal,
) -> DomainResult<TotalsReport> {
    if !money::is_valid_rate(tax_rate) {
        return Err(DomainError::validation(format!(
            "tax rate {tax_rate} outside [0, 1]"
        )));
    }

    let mut subtotal = Decimal::ZERO;
    let mut failures = Vec::new();

    for (index, item) in cart.items().iter().enumerate() {
        let priced = lookup
            .product(item.product_id())
            .ok_or_else(|| DomainError::product_not_found(item.product_id()))
            .and_then(|product| line_unit_total(product, item.accessories(), item.warranty()));

        match priced {
            Ok(unit_total) => subtotal += unit_total * Decimal::from(item.quantity()),
            Err(error) => {
                debug!(line = index, %error, "line item excluded from totals");
                failures.push(LineFailure {
                    index,
                    key: item.identity_key(),
                    error,
                });
            }
        }
    }

    let tax = subtotal * tax_rate;
    let total = subtotal + tax;

    Ok(TotalsReport {
        totals: OrderTotals {
            subtotal,
            tax,
            total,
        },
        failures,
    })
}
