use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::{AccessoryId, ProductId};

/// An optional add-on sold alongside a product (e.g. a mounting kit for a
/// smart doorbell).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessory {
    pub id: AccessoryId,
    pub name: String,
    /// Price in currency units; must be ≥ 0.
    pub price: Decimal,
}

/// A warranty tier offered for a product.
///
/// The surcharge is proportional to the discounted unit price, not a flat
/// fee: the observed tiers ("10% for 1 year, 20% for 2 years") scale with
/// what the shopper actually pays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarrantyOption {
    pub label: String,
    /// Fraction of the unit price added by this tier, in `[0, 1]`.
    pub surcharge_rate: Decimal,
}

/// The shopper's warranty choice for a line item: no warranty, or one of the
/// product's offered tiers referenced by label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Warranty {
    None,
    Tier(String),
}

impl Warranty {
    pub fn tier(label: impl Into<String>) -> Self {
        Self::Tier(label.into())
    }
}

/// Read-only product snapshot from the catalog collaborator.
///
/// The engine treats this as external data: the invariant
/// `retailer_discount + manufacturer_rebate ≤ base_price` is a data error
/// from the collaborator when violated, surfaced by the pricing rules and
/// never silently corrected here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub base_price: Decimal,
    pub available_items: u32,
    pub retailer_discount: Decimal,
    pub manufacturer_rebate: Decimal,
    pub accessories: Vec<Accessory>,
    pub warranty_options: Vec<WarrantyOption>,
}

impl Product {
    /// Look up one of this product's accessories by id.
    pub fn accessory(&self, id: AccessoryId) -> Option<&Accessory> {
        self.accessories.iter().find(|a| a.id == id)
    }

    /// Look up one of this product's warranty tiers by label.
    pub fn warranty_option(&self, label: &str) -> Option<&WarrantyOption> {
        self.warranty_options.iter().find(|w| w.label == label)
    }

    /// Whether the shopper's warranty choice is valid for this product.
    pub fn offers_warranty(&self, warranty: &Warranty) -> bool {
        match warranty {
            Warranty::None => true,
            Warranty::Tier(label) => self.warranty_option(label).is_some(),
        }
    }
}
