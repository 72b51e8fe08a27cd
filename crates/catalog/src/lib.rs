//! Catalog domain module.
//!
//! The engine never owns product data: a [`Product`] is a read-only snapshot
//! fetched by the hosting application from its backend and passed in as plain
//! data. Staleness is expected and guarded against downstream.

pub mod lookup;
pub mod product;

pub use lookup::{InMemoryCatalog, ProductLookup};
pub use product::{Accessory, Product, Warranty, WarrantyOption};
