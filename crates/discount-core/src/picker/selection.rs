//! Working selection of the product picker.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{CatalogProduct, Variant};
use crate::ids::{ProductId, VariantId};
use crate::rows::Row;

/// A product and the variants chosen for it, in toggle order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionEntry {
    pub product: CatalogProduct,
    pub selected_variants: Vec<Variant>,
}

impl SelectionEntry {
    fn contains(&self, variant: &VariantId) -> bool {
        self.selected_variants.iter().any(|v| &v.id == variant)
    }
}

/// Selection indicator shown next to a product in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionIndicator {
    /// Nothing selected.
    None,
    /// Some, but not all, catalog variants selected.
    Partial,
    /// Every catalog variant selected.
    All,
}

impl SelectionIndicator {
    /// Whether the product checkbox renders as checked.
    pub fn is_selected(&self) -> bool {
        !matches!(self, SelectionIndicator::None)
    }
}

/// Products and variants chosen while the picker is open.
///
/// Entries keep insertion order; that order becomes the order of the rows
/// created on confirm.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    entries: IndexMap<ProductId, SelectionEntry>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a committed row. Unselected rows seed nothing.
    ///
    /// A row keeps only its selected variants, so a seeded entry's `product`
    /// lists just those until one of its variants is toggled against the
    /// catalog record, which replaces it with the full listing.
    pub fn from_row(row: &Row) -> Self {
        let mut set = Self::new();
        if let Some(product_id) = &row.product_id {
            if !row.selected_variants.is_empty() {
                let product = CatalogProduct {
                    id: product_id.clone(),
                    title: row.title.clone(),
                    image: row.image.clone(),
                    variants: row.selected_variants.clone(),
                };
                set.entries.insert(
                    product_id.clone(),
                    SelectionEntry {
                        product,
                        selected_variants: row.selected_variants.clone(),
                    },
                );
            }
        }
        set
    }

    /// Number of selected products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &SelectionEntry> {
        self.entries.values()
    }

    /// Consume into entries, in insertion order.
    pub fn into_entries(self) -> Vec<SelectionEntry> {
        self.entries.into_values().collect()
    }

    pub fn entry(&self, product: &ProductId) -> Option<&SelectionEntry> {
        self.entries.get(product)
    }

    pub fn is_product_selected(&self, product: &ProductId) -> bool {
        self.entries.contains_key(product)
    }

    pub fn is_variant_selected(&self, product: &ProductId, variant: &VariantId) -> bool {
        self.entries
            .get(product)
            .is_some_and(|entry| entry.contains(variant))
    }

    /// Indicator for `product` as listed in the catalog results.
    pub fn indicator(&self, product: &CatalogProduct) -> SelectionIndicator {
        match self.entries.get(&product.id) {
            None => SelectionIndicator::None,
            Some(entry) if entry.selected_variants.len() >= product.variants.len() => {
                SelectionIndicator::All
            }
            Some(_) => SelectionIndicator::Partial,
        }
    }

    /// Select the whole product, or deselect it if already present.
    ///
    /// Returns whether the product is selected afterwards.
    pub fn toggle_product(&mut self, product: &CatalogProduct) -> bool {
        if self.entries.shift_remove(&product.id).is_some() {
            debug!(product = %product.id, "product deselected");
            return false;
        }
        self.entries.insert(
            product.id.clone(),
            SelectionEntry {
                product: product.clone(),
                selected_variants: product.variants.clone(),
            },
        );
        debug!(product = %product.id, variants = product.variants.len(), "product selected");
        true
    }

    /// Toggle one variant of `product`.
    ///
    /// Selected variants are appended in toggle order. Deselecting the last
    /// variant of a product drops the product entry. Returns whether the
    /// variant is selected afterwards.
    pub fn toggle_variant(&mut self, product: &CatalogProduct, variant: &Variant) -> bool {
        let Some(entry) = self.entries.get_mut(&product.id) else {
            self.entries.insert(
                product.id.clone(),
                SelectionEntry {
                    product: product.clone(),
                    selected_variants: vec![variant.clone()],
                },
            );
            debug!(product = %product.id, variant = %variant.id, "variant selected");
            return true;
        };

        entry.product = product.clone();
        if entry.contains(&variant.id) {
            entry.selected_variants.retain(|v| v.id != variant.id);
            if entry.selected_variants.is_empty() {
                self.entries.shift_remove(&product.id);
            }
            debug!(product = %product.id, variant = %variant.id, "variant deselected");
            false
        } else {
            entry.selected_variants.push(variant.clone());
            debug!(product = %product.id, variant = %variant.id, "variant selected");
            true
        }
    }

    /// Footer label, e.g. "1 product selected".
    pub fn selected_label(&self) -> String {
        match self.entries.len() {
            1 => "1 product selected".to_string(),
            n => format!("{} products selected", n),
        }
    }
}
