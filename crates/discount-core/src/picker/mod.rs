//! Product picker module.
//!
//! The picker works on a private copy of the selection. Nothing it does
//! reaches the product list until [`PickerState::confirm`] hands the
//! entries over.

mod pager;
mod selection;

pub use pager::{CatalogPager, FetchOutcome, FetchTicket, ScrollMetrics};
pub use selection::{SelectionEntry, SelectionIndicator, SelectionSet};

use tracing::info;

use crate::ids::RowId;

/// An open picker dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerState {
    target: RowId,
    selection: SelectionSet,
    pager: CatalogPager,
}

impl PickerState {
    /// Open the picker for the row `target`, seeded with `seed`.
    ///
    /// The row is held by identity, so list edits made while the picker is
    /// open do not redirect the confirmation. Returns the ticket for the
    /// first results page.
    pub fn open(target: RowId, seed: SelectionSet, page_size: usize) -> (Self, FetchTicket) {
        let mut pager = CatalogPager::new(page_size);
        let ticket = pager.reset("");
        info!(row = %target, seeded = seed.len(), "picker opened");
        (
            Self {
                target,
                selection: seed,
                pager,
            },
            ticket,
        )
    }

    /// Row the confirmed selection will replace.
    pub fn target(&self) -> RowId {
        self.target
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection
    }

    pub fn pager(&self) -> &CatalogPager {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut CatalogPager {
        &mut self.pager
    }

    /// Add is enabled only with something selected.
    pub fn can_confirm(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Close the dialog and hand over the selected entries in insertion order.
    pub fn confirm(self) -> Vec<SelectionEntry> {
        info!(row = %self.target, products = self.selection.len(), "picker confirmed");
        self.selection.into_entries()
    }

    /// Close the dialog, discarding the working selection.
    pub fn cancel(self) {
        info!(row = %self.target, "picker cancelled");
    }
}
