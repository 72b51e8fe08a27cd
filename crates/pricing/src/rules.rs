use std::collections::BTreeSet;

use rust_decimal::Decimal;
use tracing::warn;

use storefront_catalog::{Product, Warranty};
use storefront_core::{AccessoryId, DomainError, DomainResult, money};

/// Discounted per-unit price: base price minus retailer discount minus
/// manufacturer rebate.
///
/// A negative result means the collaborator sent broken data
/// (`retailer_discount + manufacturer_rebate > base_price`); it is reported
/// as [`DomainError::InvalidPricingData`], never clamped to zero.
pub fn unit_price(product: &Product) -> DomainResult<Decimal> {
    if product.base_price < Decimal::ZERO
        || product.retailer_discount < Decimal::ZERO
        || product.manufacturer_rebate < Decimal::ZERO
    {
        return Err(DomainError::invalid_pricing(format!(
            "negative price component on product {}",
            product.id
        )));
    }

    let price = product.base_price - product.retailer_discount - product.manufacturer_rebate;
    if price < Decimal::ZERO {
        return Err(DomainError::invalid_pricing(format!(
            "discounts ({} + {}) exceed base price {} on product {}",
            product.retailer_discount, product.manufacturer_rebate, product.base_price, product.id
        )));
    }

    Ok(price)
}

/// Warranty surcharge for a chosen tier.
///
/// Canonical rule: discount-then-surcharge. The rate applies to the already
/// discounted `unit_price`, not the original base price, so the surcharge
/// scales with what the shopper pays.
pub fn warranty_surcharge(
    unit_price: Decimal,
    product: &Product,
    warranty: &Warranty,
) -> DomainResult<Decimal> {
    let label = match warranty {
        Warranty::None => return Ok(Decimal::ZERO),
        Warranty::Tier(label) => label,
    };

    let option = product.warranty_option(label).ok_or_else(|| {
        DomainError::invalid_selection(format!(
            "warranty tier {label:?} is not offered for product {}",
            product.id
        ))
    })?;

    if !money::is_valid_rate(option.surcharge_rate) {
        return Err(DomainError::invalid_pricing(format!(
            "warranty tier {label:?} has surcharge rate {} outside [0, 1]",
            option.surcharge_rate
        )));
    }

    Ok(unit_price * option.surcharge_rate)
}

/// Sum of the selected accessories' prices.
///
/// Ids that no longer belong to the product are ignored, not rejected: the
/// selection may predate a catalog edit and the shopper should not be
/// blocked by it.
pub fn accessories_total(product: &Product, selected: &BTreeSet<AccessoryId>) -> Decimal {
    let mut total = Decimal::ZERO;
    for id in selected {
        match product.accessory(*id) {
            Some(accessory) => total += accessory.price,
            None => {
                warn!(product_id = %product.id, accessory_id = %id, "ignoring stale accessory id");
            }
        }
    }
    total
}

/// Full per-unit total for one configured line: discounted unit price plus
/// warranty surcharge plus accessories.
pub fn line_unit_total(
    product: &Product,
    selected: &BTreeSet<AccessoryId>,
    warranty: &Warranty,
) -> DomainResult<Decimal> {
    let unit = unit_price(product)?;
    let surcharge = warranty_surcharge(unit, product, warranty)?;
    Ok(unit + surcharge + accessories_total(product, selected))
}
