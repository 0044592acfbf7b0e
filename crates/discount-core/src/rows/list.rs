//! The ordered product list.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Variant;
use crate::discount::DiscountEdit;
use crate::error::DiscountError;
use crate::ids::{RowId, VariantId};
use crate::picker::SelectionEntry;
use crate::reorder::{move_element, move_positions};
use crate::rows::Row;

/// What a picker confirmation with nothing selected does to the target row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmptyConfirm {
    /// Leave the row as it is.
    #[default]
    Keep,
    /// Reset the row to an empty, unselected row.
    Clear,
}

/// The ordered sequence of rows on the page.
///
/// Always holds at least one row. Storage is copy-on-write: a
/// [`snapshot`](RootList::snapshot) taken for rendering is never affected by
/// later edits.
#[derive(Debug, Clone, PartialEq)]
pub struct RootList {
    rows: Arc<Vec<Row>>,
}

impl RootList {
    /// Create a list holding one empty row.
    pub fn new() -> Self {
        Self {
            rows: Arc::new(vec![Row::empty()]),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the list has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row at `index`.
    pub fn get(&self, index: usize) -> Result<&Row, DiscountError> {
        self.rows
            .get(index)
            .ok_or_else(|| DiscountError::invalid_index(index, self.rows.len()))
    }

    /// Position of the row with identity `id`.
    pub fn position(&self, id: &RowId) -> Option<usize> {
        self.rows.iter().position(|r| &r.id == id)
    }

    /// Immutable view of the current rows.
    pub fn snapshot(&self) -> Arc<Vec<Row>> {
        Arc::clone(&self.rows)
    }

    /// Rows can be removed only while more than one exists.
    pub fn can_remove(&self) -> bool {
        self.rows.len() > 1
    }

    fn check_index(&self, index: usize) -> Result<(), DiscountError> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(DiscountError::invalid_index(index, self.rows.len()))
        }
    }

    fn rows_mut(&mut self) -> &mut Vec<Row> {
        Arc::make_mut(&mut self.rows)
    }

    /// Append an empty row.
    pub fn add_empty_row(&mut self) -> RowId {
        let row = Row::empty();
        let id = row.id;
        self.rows_mut().push(row);
        debug!(row = %id, len = self.rows.len(), "row added");
        id
    }

    /// Remove the row at `index`. The last remaining row cannot be removed.
    pub fn remove_row(&mut self, index: usize) -> Result<Row, DiscountError> {
        self.check_index(index)?;
        if self.rows.len() == 1 {
            return Err(DiscountError::EmptyRootList);
        }
        let removed = self.rows_mut().remove(index);
        debug!(row = %removed.id, index, "row removed");
        Ok(removed)
    }

    /// Edit the discount of the row at `index`.
    pub fn set_discount(&mut self, index: usize, edit: DiscountEdit) -> Result<(), DiscountError> {
        self.check_index(index)?;
        self.rows_mut()[index].apply_edit(edit);
        debug!(index, ?edit, "row discount edited");
        Ok(())
    }

    /// Move the row `from` to the position of row `to`.
    ///
    /// Returns false (and changes nothing) when the identities are equal or
    /// either is absent.
    pub fn reorder_rows(&mut self, from: &RowId, to: &RowId) -> bool {
        let Some((from_idx, to_idx)) = move_positions(self.rows.as_slice(), from, to) else {
            return false;
        };
        move_element(self.rows_mut(), from_idx, to_idx);
        debug!(%from, %to, from_idx, to_idx, "rows reordered");
        true
    }

    /// Replace the row at `start` with one new row per confirmed entry.
    ///
    /// Rows before and after `start` keep their relative positions. An empty
    /// `entries` is handled according to `on_empty`. Returns the identities of
    /// the inserted rows.
    pub fn replace_range(
        &mut self,
        start: usize,
        entries: &[SelectionEntry],
        on_empty: EmptyConfirm,
    ) -> Result<Vec<RowId>, DiscountError> {
        self.check_index(start)?;

        let replacement: Vec<Row> = if entries.is_empty() {
            match on_empty {
                EmptyConfirm::Keep => {
                    debug!(start, "empty confirmation, row kept");
                    return Ok(Vec::new());
                }
                EmptyConfirm::Clear => vec![Row::empty()],
            }
        } else {
            entries.iter().map(Row::from_entry).collect()
        };

        let ids: Vec<RowId> = replacement.iter().map(|r| r.id).collect();
        self.rows_mut().splice(start..=start, replacement);
        debug!(start, inserted = ids.len(), len = self.rows.len(), "rows replaced");
        Ok(ids)
    }

    /// Replace the selected variants of the row at `index`.
    pub fn update_variants(
        &mut self,
        index: usize,
        variants: Vec<Variant>,
    ) -> Result<(), DiscountError> {
        self.check_index(index)?;
        if let Some(dup) = Row::first_duplicate(&variants) {
            return Err(DiscountError::DuplicateVariant(dup.clone()));
        }
        self.rows_mut()[index].selected_variants = variants;
        Ok(())
    }

    /// Move variant `from` to the position of variant `to` within one row.
    pub fn reorder_variants(
        &mut self,
        index: usize,
        from: &VariantId,
        to: &VariantId,
    ) -> Result<bool, DiscountError> {
        let row = self.get(index)?;
        let Some((from_idx, to_idx)) = move_positions(&row.selected_variants, from, to) else {
            return Ok(false);
        };
        move_element(
            &mut self.rows_mut()[index].selected_variants,
            from_idx,
            to_idx,
        );
        debug!(index, %from, %to, "variants reordered");
        Ok(true)
    }

    /// Remove one selected variant. A row's only variant cannot be removed.
    pub fn remove_variant(
        &mut self,
        index: usize,
        variant: &VariantId,
    ) -> Result<Variant, DiscountError> {
        let row = self.get(index)?;
        let position = row
            .variant_position(variant)
            .ok_or_else(|| DiscountError::VariantNotFound(variant.clone()))?;
        if !row.can_remove_variant() {
            return Err(DiscountError::invalid_index(
                position,
                row.selected_variants.len(),
            ));
        }
        let removed = self.rows_mut()[index].selected_variants.remove(position);
        debug!(index, variant = %removed.id, "variant removed");
        Ok(removed)
    }

    /// Set an explicit discount override on one selected variant.
    pub fn set_variant_discount(
        &mut self,
        index: usize,
        variant: &VariantId,
        edit: DiscountEdit,
    ) -> Result<(), DiscountError> {
        let position = self
            .get(index)?
            .variant_position(variant)
            .ok_or_else(|| DiscountError::VariantNotFound(variant.clone()))?;
        let target = &mut self.rows_mut()[index].selected_variants[position];
        match edit {
            DiscountEdit::Value(value) => target.discount = Some(value),
            DiscountEdit::Type(discount_type) => target.discount_type = Some(discount_type),
        }
        debug!(index, %variant, ?edit, "variant discount edited");
        Ok(())
    }
}

impl Default for RootList {
    fn default() -> Self {
        Self::new()
    }
}
