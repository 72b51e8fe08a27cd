//! Monetary helpers.
//!
//! All monetary values and rates are `rust_decimal::Decimal`. Intermediate
//! computations are never rounded; rounding to currency display precision
//! happens only at the presentation boundary, via [`to_display`].

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places rendered for currency amounts.
pub const DISPLAY_SCALE: u32 = 2;

/// Round a monetary amount to display precision (2 dp, midpoint away from
/// zero). Never use this between computation steps.
pub fn to_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Whether a rate (tax rate, warranty surcharge rate) lies in `[0, 1]`.
pub fn is_valid_rate(rate: Decimal) -> bool {
    rate >= Decimal::ZERO && rate <= Decimal::ONE
}
