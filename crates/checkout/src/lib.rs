//! Checkout domain module.
//!
//! Folds a cart snapshot into a subtotal/tax/total breakdown and builds the
//! order draft handed to the order-placement collaborator. Pure and
//! synchronous; product resolution is injected as plain data.

pub mod order;
pub mod totals;

pub use order::OrderDraft;
pub use totals::{LineFailure, OrderTotals, TotalsReport, compute_totals};
