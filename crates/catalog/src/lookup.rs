//! Product lookup boundary.
//!
//! Fetching current price/stock is the hosting application's job (REST call,
//! cache, fixture). The engine only sees the result, as plain data, through
//! [`ProductLookup`].

use std::collections::HashMap;

use storefront_core::ProductId;

use crate::product::Product;

/// Maps a product id to its current catalog snapshot.
///
/// Returning `None` means the product no longer exists (deleted after being
/// added to a cart); callers surface that per line item rather than dropping
/// the line silently.
pub trait ProductLookup {
    fn product(&self, id: ProductId) -> Option<&Product>;
}

/// In-memory catalog, for hosts without a live backend and for tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: HashMap<ProductId, Product>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a product snapshot.
    pub fn insert(&mut self, product: Product) {
        self.products.insert(product.id, product);
    }

    /// Remove a product, e.g. to simulate catalog deletion.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        self.products.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductLookup for InMemoryCatalog {
    fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }
}

impl ProductLookup for HashMap<ProductId, Product> {
    fn product(&self, id: ProductId) -> Option<&Product> {
        self.get(&id)
    }
}
