//! Cart domain module.
//!
//! This crate contains the line item model and the cart aggregate,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). The cart is an immutable value: every operation returns a new
//! `Cart`, and the hosting UI layer owns the single current instance.

pub mod aggregate;
pub mod line_item;

pub use aggregate::Cart;
pub use line_item::{IdentityKey, LineItem, QuantityChange};
