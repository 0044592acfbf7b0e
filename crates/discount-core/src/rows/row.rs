//! Product row type.

use crate::catalog::{ProductImage, Variant};
use crate::discount::{DiscountEdit, DiscountType};
use crate::ids::{ProductId, RowId, VariantId};
use crate::picker::SelectionEntry;
use serde::{Deserialize, Serialize};

/// A row in the product list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Row {
    /// Row identity, unique within the list and never reused.
    pub id: RowId,
    /// Catalog product backing this row, once one has been picked.
    pub product_id: Option<ProductId>,
    /// Product title; empty until a product is picked.
    pub title: String,
    /// Product image.
    pub image: Option<ProductImage>,
    /// Row-level discount value.
    pub discount: Option<f64>,
    /// Row-level discount type.
    pub discount_type: DiscountType,
    /// Chosen variants, in display order.
    pub selected_variants: Vec<Variant>,
}

impl Row {
    /// Create an empty row with a fresh identity.
    pub fn empty() -> Self {
        Self {
            id: RowId::generate(),
            product_id: None,
            title: String::new(),
            image: None,
            discount: None,
            discount_type: DiscountType::default(),
            selected_variants: Vec::new(),
        }
    }

    /// Create a populated row from a confirmed picker entry.
    ///
    /// The row gets a fresh identity and starts with no discount; variant
    /// overrides carried by the entry are dropped.
    pub fn from_entry(entry: &SelectionEntry) -> Self {
        Self {
            id: RowId::generate(),
            product_id: Some(entry.product.id.clone()),
            title: entry.product.title.clone(),
            image: entry.product.image.clone(),
            discount: None,
            discount_type: DiscountType::default(),
            selected_variants: entry
                .selected_variants
                .iter()
                .map(Variant::without_overrides)
                .collect(),
        }
    }

    /// A row with no title and no variants shows the "Select Product" prompt.
    pub fn is_unselected(&self) -> bool {
        self.title.is_empty() && self.selected_variants.is_empty()
    }

    /// Title to display: the single variant's title when exactly one is
    /// selected, otherwise the product title.
    pub fn display_title(&self) -> &str {
        match self.selected_variants.as_slice() {
            [only] => &only.title,
            _ => &self.title,
        }
    }

    /// Whether the variant sub-list is shown.
    pub fn shows_variant_list(&self) -> bool {
        self.selected_variants.len() > 1
    }

    /// Variants can be removed only while more than one remains.
    pub fn can_remove_variant(&self) -> bool {
        self.selected_variants.len() > 1
    }

    /// Position of a selected variant.
    pub fn variant_position(&self, id: &VariantId) -> Option<usize> {
        self.selected_variants.iter().position(|v| &v.id == id)
    }

    /// Apply a row-level discount edit.
    pub fn apply_edit(&mut self, edit: DiscountEdit) {
        match edit {
            DiscountEdit::Value(value) => self.discount = Some(value),
            DiscountEdit::Type(discount_type) => self.discount_type = discount_type,
        }
    }

    /// First duplicated variant identity in `variants`, if any.
    pub(crate) fn first_duplicate(variants: &[Variant]) -> Option<&VariantId> {
        variants
            .iter()
            .enumerate()
            .find(|(i, v)| variants[..*i].iter().any(|earlier| earlier.id == v.id))
            .map(|(_, v)| &v.id)
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogProduct;
    use crate::money::{Currency, Money};

    fn variant(id: &str, title: &str) -> Variant {
        Variant::new(id, "77", title, Money::new(4900, Currency::USD))
    }

    #[test]
    fn test_empty_row() {
        let row = Row::empty();
        assert!(row.is_unselected());
        assert_eq!(row.display_title(), "");
        assert_eq!(row.discount_type, DiscountType::Percent);
    }

    #[test]
    fn test_from_entry_clears_overrides() {
        let product = CatalogProduct::new("77", "Towel")
            .with_variant(variant("1", "Beige"))
            .with_variant(variant("2", "Olive"));
        let entry = SelectionEntry {
            selected_variants: vec![variant("2", "Olive").with_discount(5.0, DiscountType::Flat)],
            product,
        };

        let row = Row::from_entry(&entry);
        assert_eq!(row.product_id, Some(ProductId::new("77")));
        assert_eq!(row.discount, None);
        assert_eq!(row.selected_variants.len(), 1);
        assert!(!row.selected_variants[0].has_override());
    }

    #[test]
    fn test_display_title() {
        let mut row = Row::empty();
        row.title = "Towel".to_string();
        row.selected_variants = vec![variant("1", "Beige")];
        assert_eq!(row.display_title(), "Beige");
        assert!(!row.shows_variant_list());

        row.selected_variants.push(variant("2", "Olive"));
        assert_eq!(row.display_title(), "Towel");
        assert!(row.shows_variant_list());
    }

    #[test]
    fn test_first_duplicate() {
        let vs = vec![variant("1", "a"), variant("2", "b"), variant("1", "c")];
        assert_eq!(Row::first_duplicate(&vs), Some(&VariantId::new("1")));
        assert_eq!(Row::first_duplicate(&vs[..2]), None);
    }
}
