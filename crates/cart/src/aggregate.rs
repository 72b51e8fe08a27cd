use serde::{Deserialize, Serialize};
use tracing::debug;

use storefront_catalog::Product;
use storefront_core::{DomainError, DomainResult, ValueObject};

use crate::line_item::{IdentityKey, LineItem, QuantityChange};

/// A shopping cart: an ordered sequence of line items, no two of which share
/// an identity key.
///
/// The cart is an immutable value. Every operation returns a new `Cart`
/// instead of mutating the receiver, so concurrent readers never observe a
/// half-updated cart; the hosting UI layer owns the single current instance
/// and re-renders from the returned value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Quantity currently carried for a configuration, if present.
    pub fn quantity_of(&self, key: &IdentityKey) -> Option<u32> {
        self.position(key).map(|i| self.items[i].quantity())
    }

    /// Add a line item, merging with an existing entry of identical
    /// configuration.
    ///
    /// On merge the quantities are summed and re-checked against the
    /// product's current availability; `OutOfStock` reports the combined
    /// quantity. `product` must be the snapshot the item was built from.
    pub fn add(&self, item: LineItem, product: &Product) -> DomainResult<Cart> {
        if item.product_id() != product.id {
            return Err(DomainError::validation(format!(
                "product snapshot {} does not match line item product {}",
                product.id,
                item.product_id()
            )));
        }

        let key = item.identity_key();
        let mut items = self.items.clone();

        match self.position(&key) {
            Some(i) => {
                // Both quantities may individually fit the stock; the sum can
                // still overflow u32, and an overflowed sum always exceeds it.
                let combined = items[i]
                    .quantity()
                    .checked_add(item.quantity())
                    .ok_or_else(|| {
                        DomainError::out_of_stock(u32::MAX, product.available_items)
                    })?;
                if combined > product.available_items {
                    return Err(DomainError::out_of_stock(
                        combined,
                        product.available_items,
                    ));
                }
                debug!(product_id = %product.id, quantity = combined, "merged cart entries");
                match item.with_quantity(combined) {
                    QuantityChange::Updated(merged) => items[i] = merged,
                    // Unreachable: both quantities are ≥ 1.
                    QuantityChange::Removed => {
                        items.remove(i);
                    }
                }
            }
            None => items.push(item),
        }

        Ok(Cart { items })
    }

    /// Remove the entry with the given identity. No-op when absent.
    pub fn remove(&self, key: &IdentityKey) -> Cart {
        let items = self
            .items
            .iter()
            .filter(|item| item.identity_key() != *key)
            .cloned()
            .collect();
        Cart { items }
    }

    /// Change an entry's quantity. Zero removes the entry; an absent key
    /// leaves the cart unchanged; a quantity beyond the product's current
    /// availability fails with `OutOfStock`.
    pub fn update_quantity(
        &self,
        key: &IdentityKey,
        new_quantity: u32,
        product: &Product,
    ) -> DomainResult<Cart> {
        let Some(i) = self.position(key) else {
            return Ok(self.clone());
        };

        if new_quantity > product.available_items {
            return Err(DomainError::out_of_stock(
                new_quantity,
                product.available_items,
            ));
        }

        match self.items[i].with_quantity(new_quantity) {
            QuantityChange::Removed => Ok(self.remove(key)),
            QuantityChange::Updated(updated) => {
                let mut items = self.items.clone();
                items[i] = updated;
                Ok(Cart { items })
            }
        }
    }

    /// Empty the cart (successful order placement or explicit clear).
    pub fn clear(&self) -> Cart {
        Cart::new()
    }

    fn position(&self, key: &IdentityKey) -> Option<usize> {
        self.items.iter().position(|item| item.identity_key() == *key)
    }
}

impl ValueObject for Cart {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use storefront_catalog::{Accessory, Warranty, WarrantyOption};
    use storefront_core::{AccessoryId, ProductId};

    fn doorbell() -> Product {
        Product {
            id: ProductId::new(),
            name: "Smart Doorbell".to_string(),
            base_price: dec!(100),
            available_items: 5,
            retailer_discount: dec!(10),
            manufacturer_rebate: dec!(5),
            accessories: vec![Accessory {
                id: AccessoryId::new(),
                name: "Mounting Kit".to_string(),
                price: dec!(20),
            }],
            warranty_options: vec![WarrantyOption {
                label: "1 Year".to_string(),
                surcharge_rate: dec!(0.10),
            }],
        }
    }

    fn item(product: &Product, quantity: u32) -> LineItem {
        LineItem::new(product, [], Warranty::None, quantity).unwrap()
    }

    #[test]
    fn add_then_remove_restores_original_cart() {
        let product = doorbell();
        let original = Cart::new();
        let added = original.add(item(&product, 1), &product).unwrap();
        assert_eq!(added.len(), 1);

        let removed = added.remove(&item(&product, 1).identity_key());
        assert_eq!(removed, original);
    }

    #[test]
    fn identical_configurations_merge_into_one_entry() {
        let product = doorbell();
        let cart = Cart::new()
            .add(item(&product, 2), &product)
            .unwrap()
            .add(item(&product, 3), &product)
            .unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity(), 5);
    }

    #[test]
    fn merge_respects_stock_ceiling() {
        let product = doorbell();
        let cart = Cart::new().add(item(&product, 3), &product).unwrap();
        let err = cart.add(item(&product, 3), &product).unwrap_err();
        assert_eq!(err, DomainError::out_of_stock(6, 5));
        // Failed add leaves the original untouched.
        assert_eq!(cart.items()[0].quantity(), 3);
    }

    #[test]
    fn merge_beyond_u32_range_is_out_of_stock() {
        let mut product = doorbell();
        product.available_items = u32::MAX;

        let cart = Cart::new()
            .add(item(&product, u32::MAX), &product)
            .unwrap();
        let err = cart.add(item(&product, 1), &product).unwrap_err();
        assert!(matches!(err, DomainError::OutOfStock { .. }));
        // Failed merge leaves the existing entry intact.
        assert_eq!(cart.items()[0].quantity(), u32::MAX);
    }

    #[test]
    fn differing_warranty_does_not_merge() {
        let product = doorbell();
        let bare = item(&product, 1);
        let covered = LineItem::new(&product, [], Warranty::tier("1 Year"), 1).unwrap();

        let cart = Cart::new()
            .add(bare, &product)
            .unwrap()
            .add(covered, &product)
            .unwrap();
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn update_quantity_to_zero_equals_remove() {
        let product = doorbell();
        let key = item(&product, 2).identity_key();
        let cart = Cart::new().add(item(&product, 2), &product).unwrap();

        let via_update = cart.update_quantity(&key, 0, &product).unwrap();
        let via_remove = cart.remove(&key);
        assert_eq!(via_update, via_remove);
        assert!(via_update.is_empty());
    }

    #[test]
    fn update_quantity_replaces_entry() {
        let product = doorbell();
        let key = item(&product, 2).identity_key();
        let cart = Cart::new().add(item(&product, 2), &product).unwrap();

        let updated = cart.update_quantity(&key, 4, &product).unwrap();
        assert_eq!(updated.quantity_of(&key), Some(4));
        // Original cart value unchanged.
        assert_eq!(cart.quantity_of(&key), Some(2));
    }

    #[test]
    fn update_quantity_respects_stock_ceiling() {
        let product = doorbell();
        let key = item(&product, 2).identity_key();
        let cart = Cart::new().add(item(&product, 2), &product).unwrap();

        let err = cart.update_quantity(&key, 9, &product).unwrap_err();
        assert_eq!(err, DomainError::out_of_stock(9, 5));
    }

    #[test]
    fn update_quantity_on_absent_key_is_a_no_op() {
        let product = doorbell();
        let other = doorbell();
        let cart = Cart::new().add(item(&product, 1), &product).unwrap();

        let key = item(&other, 1).identity_key();
        let unchanged = cart.update_quantity(&key, 3, &other).unwrap();
        assert_eq!(unchanged, cart);
    }

    #[test]
    fn remove_of_absent_key_is_a_no_op() {
        let product = doorbell();
        let other = doorbell();
        let cart = Cart::new().add(item(&product, 1), &product).unwrap();
        assert_eq!(cart.remove(&item(&other, 1).identity_key()), cart);
    }

    #[test]
    fn clear_empties_the_cart() {
        let product = doorbell();
        let cart = Cart::new().add(item(&product, 2), &product).unwrap();
        assert_eq!(cart.clear(), Cart::new());
    }

    #[test]
    fn add_rejects_mismatched_product_snapshot() {
        let product = doorbell();
        let other = doorbell();
        let err = Cart::new().add(item(&product, 1), &other).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn cart_serde_round_trip() {
        let product = doorbell();
        let kit = product.accessories[0].id;
        let configured = LineItem::new(&product, [kit], Warranty::tier("1 Year"), 2).unwrap();
        let cart = Cart::new().add(configured, &product).unwrap();

        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(cart, back);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Adding identical configurations always yields exactly one
            /// entry carrying the summed quantity.
            #[test]
            fn merge_sums_quantities(q1 in 1u32..50, q2 in 1u32..50) {
                let mut product = doorbell();
                product.available_items = 100;

                let cart = Cart::new()
                    .add(item(&product, q1), &product).unwrap()
                    .add(item(&product, q2), &product).unwrap();

                prop_assert_eq!(cart.len(), 1);
                prop_assert_eq!(cart.items()[0].quantity(), q1 + q2);
            }

            /// `add` followed by `remove` of the same identity restores the
            /// original cart.
            #[test]
            fn add_remove_round_trip(q in 1u32..100) {
                let mut product = doorbell();
                product.available_items = 100;

                let original = Cart::new();
                let line = item(&product, q);
                let key = line.identity_key();
                let round_tripped = original.add(line, &product).unwrap().remove(&key);
                prop_assert_eq!(round_tripped, original);
            }

            /// Updating to zero is always equivalent to removal.
            #[test]
            fn zero_update_equals_remove(q in 1u32..100) {
                let mut product = doorbell();
                product.available_items = 100;

                let line = item(&product, q);
                let key = line.identity_key();
                let cart = Cart::new().add(line, &product).unwrap();

                prop_assert_eq!(
                    cart.update_quantity(&key, 0, &product).unwrap(),
                    cart.remove(&key)
                );
            }
        }
    }
}
