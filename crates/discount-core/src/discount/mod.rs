//! Discount module.
//!
//! Contains discount types, edits and the row/variant inheritance policy.

mod edit;
mod policy;

pub use edit::{DiscountEdit, DiscountType};
pub use policy::{effective_discount, resolve_discount, EffectiveDiscount};
