//! `storefront-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::{AccessoryId, ProductId};
pub use money::{is_valid_rate, to_display};
pub use value_object::ValueObject;
