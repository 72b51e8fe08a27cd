//! Pricing rules for the storefront engine.
//!
//! Pure, side-effect-free functions, implemented once and called from every
//! surface (cart page, checkout, product-detail preview) so no caller
//! reimplements the arithmetic. All money is `Decimal`; nothing here rounds.

pub mod rules;

pub use rules::{accessories_total, line_unit_total, unit_price, warranty_surcharge};
