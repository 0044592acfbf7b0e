//! Render snapshots handed to the view layer.
//!
//! Views are plain owned values: effective discounts are already resolved
//! and every affordance flag is precomputed, so the view layer never reads
//! live state.

use serde::Serialize;

use crate::catalog::{CatalogProduct, Variant};
use crate::discount::{effective_discount, DiscountType, EffectiveDiscount};
use crate::ids::{ProductId, RowId, VariantId};
use crate::picker::{PickerState, SelectionIndicator, SelectionSet};
use crate::rows::{RootList, Row};

/// A selected variant under a row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VariantView {
    pub id: VariantId,
    pub title: String,
    /// Formatted price, e.g. "$20.99".
    pub price: String,
    pub effective_discount: Option<EffectiveDiscount>,
    /// Formatted price after the effective discount.
    pub discounted_price: Option<String>,
    pub can_remove: bool,
}

impl VariantView {
    fn build(row: &Row, variant: &Variant) -> Self {
        let effective = effective_discount(row, variant);
        Self {
            id: variant.id.clone(),
            title: variant.title.clone(),
            price: variant.price.display(),
            effective_discount: effective,
            discounted_price: effective.map(|d| d.apply(&variant.price).display()),
            can_remove: row.can_remove_variant(),
        }
    }
}

/// One row of the product list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RowView {
    pub id: RowId,
    /// 1-based position label.
    pub position: usize,
    pub title: String,
    /// No product picked yet.
    pub unselected: bool,
    pub discount: Option<f64>,
    pub discount_type: DiscountType,
    pub can_remove: bool,
    pub shows_variant_list: bool,
    pub variants: Vec<VariantView>,
}

/// The product list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListView {
    pub rows: Vec<RowView>,
}

impl ListView {
    pub fn build(list: &RootList) -> Self {
        let can_remove = list.can_remove();
        let rows = list
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| RowView {
                id: row.id,
                position: i + 1,
                title: row.display_title().to_string(),
                unselected: row.is_unselected(),
                discount: row.discount,
                discount_type: row.discount_type,
                can_remove,
                shows_variant_list: row.shows_variant_list(),
                variants: row
                    .selected_variants
                    .iter()
                    .map(|v| VariantView::build(row, v))
                    .collect(),
            })
            .collect();
        Self { rows }
    }
}

/// A variant listed in the picker.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PickerVariantView {
    pub id: VariantId,
    pub title: String,
    pub availability: Option<i64>,
    pub price: String,
    pub selected: bool,
}

/// A product listed in the picker.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PickerProductView {
    pub id: ProductId,
    pub title: String,
    pub image: Option<String>,
    pub indicator: SelectionIndicator,
    pub variants: Vec<PickerVariantView>,
}

impl PickerProductView {
    fn build(product: &CatalogProduct, selection: &SelectionSet) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            image: product.image.as_ref().map(|i| i.src.clone()),
            indicator: selection.indicator(product),
            variants: product
                .variants
                .iter()
                .map(|v| PickerVariantView {
                    id: v.id.clone(),
                    title: v.title.clone(),
                    availability: v.availability,
                    price: v.price.display(),
                    selected: selection.is_variant_selected(&product.id, &v.id),
                })
                .collect(),
        }
    }
}

/// The open picker dialog.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PickerView {
    pub search_term: String,
    pub products: Vec<PickerProductView>,
    pub loading: bool,
    pub has_more: bool,
    /// Show the "No more products" marker.
    pub end_of_results: bool,
    /// Inline notice after a failed fetch.
    pub notice: Option<String>,
    pub selected_label: String,
    pub can_confirm: bool,
}

impl PickerView {
    pub fn build(picker: &PickerState) -> Self {
        let pager = picker.pager();
        let selection = picker.selection();
        Self {
            search_term: pager.search_term().to_string(),
            products: pager
                .results()
                .iter()
                .map(|p| PickerProductView::build(p, selection))
                .collect(),
            loading: pager.is_loading(),
            has_more: pager.has_more(),
            end_of_results: pager.is_exhausted(),
            notice: pager.notice().map(str::to_string),
            selected_label: selection.selected_label(),
            can_confirm: picker.can_confirm(),
        }
    }
}

/// Everything the page renders.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PageView {
    pub list: ListView,
    pub picker: Option<PickerView>,
}

impl PageView {
    pub fn build(list: &RootList, picker: Option<&PickerState>) -> Self {
        Self {
            list: ListView::build(list),
            picker: picker.map(PickerView::build),
        }
    }

    /// Serialize for a JavaScript view layer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
