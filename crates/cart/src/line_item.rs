use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_catalog::{Product, Warranty};
use storefront_core::{AccessoryId, DomainError, DomainResult, ProductId, ValueObject};
use storefront_pricing::unit_price;

/// Composite identity of a line item: `(product, sorted accessories,
/// warranty)`.
///
/// Two line items with the same key represent the same configuration and
/// must merge, regardless of the order the accessories were picked in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityKey {
    pub product_id: ProductId,
    /// Sorted, deduplicated accessory ids.
    pub accessories: Vec<AccessoryId>,
    pub warranty: Warranty,
}

/// One configured product entry in a cart.
///
/// `unit_price` is a snapshot of the product's discounted per-unit price at
/// add time; reconfiguring accessories or warranty is modeled as
/// removal + re-add, so the only mutation path is [`LineItem::with_quantity`].
///
/// Deserialization goes through [`RawLineItem`] so a persisted cart cannot
/// resurrect values that bypass the constructor's invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLineItem")]
pub struct LineItem {
    product_id: ProductId,
    unit_price: Decimal,
    accessories: BTreeSet<AccessoryId>,
    warranty: Warranty,
    quantity: u32,
}

/// Wire shape of a line item, re-validated before becoming a [`LineItem`].
#[derive(Debug, Deserialize)]
struct RawLineItem {
    product_id: ProductId,
    unit_price: Decimal,
    accessories: BTreeSet<AccessoryId>,
    warranty: Warranty,
    quantity: u32,
}

impl TryFrom<RawLineItem> for LineItem {
    type Error = DomainError;

    fn try_from(raw: RawLineItem) -> DomainResult<Self> {
        if raw.quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        if raw.unit_price < Decimal::ZERO {
            return Err(DomainError::invalid_pricing(format!(
                "negative unit price snapshot on product {}",
                raw.product_id
            )));
        }
        Ok(Self {
            product_id: raw.product_id,
            unit_price: raw.unit_price,
            accessories: raw.accessories,
            warranty: raw.warranty,
            quantity: raw.quantity,
        })
    }
}

/// Result of a quantity change: a replacement value, or a signal that the
/// entry should be dropped from the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityChange {
    Updated(LineItem),
    Removed,
}

impl LineItem {
    /// Create a line item from a confirmed product configuration.
    ///
    /// Fails with `OutOfStock` when the quantity exceeds current
    /// availability, and with `InvalidSelection` when an accessory id or the
    /// warranty tier does not belong to the product. Duplicate accessory ids
    /// collapse.
    pub fn new(
        product: &Product,
        accessory_ids: impl IntoIterator<Item = AccessoryId>,
        warranty: Warranty,
        quantity: u32,
    ) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        if quantity > product.available_items {
            return Err(DomainError::out_of_stock(quantity, product.available_items));
        }

        let accessories: BTreeSet<AccessoryId> = accessory_ids.into_iter().collect();
        for id in &accessories {
            if product.accessory(*id).is_none() {
                return Err(DomainError::invalid_selection(format!(
                    "accessory {id} does not belong to product {}",
                    product.id
                )));
            }
        }

        if !product.offers_warranty(&warranty) {
            return Err(DomainError::invalid_selection(format!(
                "warranty {warranty:?} is not offered for product {}",
                product.id
            )));
        }

        Ok(Self {
            product_id: product.id,
            unit_price: unit_price(product)?,
            accessories,
            warranty,
            quantity,
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Discounted per-unit price captured when the item was created.
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn accessories(&self) -> &BTreeSet<AccessoryId> {
        &self.accessories
    }

    pub fn warranty(&self) -> &Warranty {
        &self.warranty
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Return a copy with the new quantity, or `Removed` when the quantity
    /// drops to zero. Never mutates in place; the cart aggregate replaces or
    /// drops the entry.
    pub fn with_quantity(&self, new_quantity: u32) -> QuantityChange {
        if new_quantity == 0 {
            QuantityChange::Removed
        } else {
            QuantityChange::Updated(Self {
                quantity: new_quantity,
                ..self.clone()
            })
        }
    }

    /// Merge key for the cart aggregate.
    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey {
            product_id: self.product_id,
            accessories: self.accessories.iter().copied().collect(),
            warranty: self.warranty.clone(),
        }
    }
}

impl ValueObject for LineItem {}
