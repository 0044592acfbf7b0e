//! Row/variant discount inheritance.

use crate::catalog::Variant;
use crate::discount::DiscountType;
use crate::money::Money;
use crate::rows::Row;
use serde::{Deserialize, Serialize};

/// The discount that applies to a variant after inheritance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveDiscount {
    pub value: f64,
    pub discount_type: DiscountType,
}

impl EffectiveDiscount {
    pub fn new(value: f64, discount_type: DiscountType) -> Self {
        Self {
            value,
            discount_type,
        }
    }

    /// Amount taken off `price`. Never more than the price itself.
    pub fn amount_off(&self, price: &Money) -> Money {
        let off = match self.discount_type {
            DiscountType::Percent => price.percent(self.value),
            DiscountType::Flat => Money::from_decimal(self.value, price.currency),
        };
        Money::new(price.cents - price.reduced_by(off).cents, price.currency)
    }

    /// Price after the discount.
    pub fn apply(&self, price: &Money) -> Money {
        price.reduced_by(self.amount_off(price))
    }
}

/// Resolve a variant's discount against its parent's discount.
///
/// The value and the type inherit independently: an overridden field wins,
/// an absent one falls back to the parent. With no value on either side
/// there is no discount.
pub fn resolve_discount(
    parent_value: Option<f64>,
    parent_type: DiscountType,
    variant: &Variant,
) -> Option<EffectiveDiscount> {
    let value = variant.discount.or(parent_value)?;
    let discount_type = variant.discount_type.unwrap_or(parent_type);
    Some(EffectiveDiscount::new(value, discount_type))
}

/// Effective discount for `variant` shown under `row`.
pub fn effective_discount(row: &Row, variant: &Variant) -> Option<EffectiveDiscount> {
    resolve_discount(row.discount, row.discount_type, variant)
}
