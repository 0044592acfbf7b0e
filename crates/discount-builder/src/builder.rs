//! The page session.

use discount_catalog::{CatalogClient, RetryingCatalog};
use discount_core::catalog::{CatalogProduct, Variant};
use discount_core::discount::DiscountEdit;
use discount_core::ids::{ProductId, RowId, VariantId};
use discount_core::picker::{FetchOutcome, FetchTicket, PickerState, ScrollMetrics, SelectionSet};
use discount_core::rows::{RootList, Row};
use discount_core::view::PageView;
use discount_core::DiscountError;
use tracing::{debug, info, warn};

use crate::config::BuilderConfig;
use crate::error::BuilderError;

/// Product list plus an optional open picker, backed by a catalog client.
///
/// Fetching is split in two so the caller owns scheduling: an action that
/// needs results returns a [`FetchTicket`], [`fetch`](Self::fetch) runs it,
/// and [`apply_fetch`](Self::apply_fetch) folds the response back in. A
/// response whose ticket is no longer current is dropped.
#[derive(Debug)]
pub struct DiscountBuilder<C> {
    list: RootList,
    picker: Option<PickerState>,
    client: C,
    config: BuilderConfig,
}

impl<C> DiscountBuilder<RetryingCatalog<C>>
where
    C: CatalogClient,
{
    /// Wrap `client` in the configured retry policy.
    pub fn with_retries(client: C, config: BuilderConfig) -> Self {
        let policy = config.catalog.retry_policy();
        Self::new(RetryingCatalog::new(client, policy), config)
    }
}

#[cfg(target_arch = "wasm32")]
impl DiscountBuilder<RetryingCatalog<discount_catalog::SpinCatalogClient>> {
    /// Builder searching the configured HTTP endpoint.
    pub fn spin(config: BuilderConfig) -> Self {
        let client = discount_catalog::SpinCatalogClient::new(config.catalog.endpoint());
        Self::with_retries(client, config)
    }
}

impl<C: CatalogClient> DiscountBuilder<C> {
    pub fn new(client: C, config: BuilderConfig) -> Self {
        Self {
            list: RootList::new(),
            picker: None,
            client,
            config,
        }
    }

    pub fn list(&self) -> &RootList {
        &self.list
    }

    pub fn picker(&self) -> Option<&PickerState> {
        self.picker.as_ref()
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Render snapshot of the whole page.
    pub fn view(&self) -> PageView {
        PageView::build(&self.list, self.picker.as_ref())
    }

    // ── Product list ───────────────────────────────────────────────────

    /// Append an empty row.
    pub fn add_product(&mut self) -> RowId {
        self.list.add_empty_row()
    }

    pub fn remove_product(&mut self, index: usize) -> Result<Row, BuilderError> {
        Ok(self.list.remove_row(index)?)
    }

    pub fn set_discount(&mut self, index: usize, edit: DiscountEdit) -> Result<(), BuilderError> {
        Ok(self.list.set_discount(index, edit)?)
    }

    /// Discount value typed into the row's input.
    pub fn set_discount_input(&mut self, index: usize, input: &str) -> Result<(), BuilderError> {
        self.set_discount(index, DiscountEdit::parse_value(input))
    }

    /// Discount type chosen from the row's selector.
    pub fn set_discount_type(&mut self, index: usize, token: &str) -> Result<(), BuilderError> {
        let edit = DiscountEdit::parse_type(token)?;
        self.set_discount(index, edit)
    }

    /// Drag-and-drop of one row onto another.
    pub fn reorder_rows(&mut self, from: &RowId, to: &RowId) -> bool {
        self.list.reorder_rows(from, to)
    }

    pub fn update_variants(
        &mut self,
        index: usize,
        variants: Vec<Variant>,
    ) -> Result<(), BuilderError> {
        Ok(self.list.update_variants(index, variants)?)
    }

    pub fn reorder_variants(
        &mut self,
        index: usize,
        from: &VariantId,
        to: &VariantId,
    ) -> Result<bool, BuilderError> {
        Ok(self.list.reorder_variants(index, from, to)?)
    }

    pub fn remove_variant(
        &mut self,
        index: usize,
        variant: &VariantId,
    ) -> Result<Variant, BuilderError> {
        Ok(self.list.remove_variant(index, variant)?)
    }

    pub fn set_variant_discount(
        &mut self,
        index: usize,
        variant: &VariantId,
        edit: DiscountEdit,
    ) -> Result<(), BuilderError> {
        Ok(self.list.set_variant_discount(index, variant, edit)?)
    }

    // ── Picker ─────────────────────────────────────────────────────────

    fn picker_mut(&mut self) -> Result<&mut PickerState, BuilderError> {
        self.picker.as_mut().ok_or(BuilderError::PickerClosed)
    }

    fn listed(&self, product: &ProductId) -> Result<&CatalogProduct, BuilderError> {
        self.picker
            .as_ref()
            .ok_or(BuilderError::PickerClosed)?
            .pager()
            .results()
            .iter()
            .find(|p| &p.id == product)
            .ok_or_else(|| BuilderError::ProductNotListed(product.clone()))
    }

    /// Open the picker for the row at `index`, seeded with that row's
    /// current product and variants.
    pub fn open_picker(&mut self, index: usize) -> Result<FetchTicket, BuilderError> {
        if let Some(open) = &self.picker {
            return Err(BuilderError::PickerAlreadyOpen(open.target()));
        }
        let row = self.list.get(index)?;
        let seed = SelectionSet::from_row(row);
        let (picker, ticket) = PickerState::open(row.id, seed, self.config.catalog.page_size);
        self.picker = Some(picker);
        Ok(ticket)
    }

    /// Restart the result list for a new search term.
    pub fn search(&mut self, term: &str) -> Result<FetchTicket, BuilderError> {
        Ok(self.picker_mut()?.pager_mut().reset(term))
    }

    /// Scroll position of the result list changed.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Result<Option<FetchTicket>, BuilderError> {
        let threshold = self.config.picker.scroll_threshold;
        Ok(self.picker_mut()?.pager_mut().on_scroll(metrics, threshold))
    }

    /// Retry after a failed page, or load the next page explicitly.
    pub fn load_more(&mut self) -> Result<Option<FetchTicket>, BuilderError> {
        Ok(self.picker_mut()?.pager_mut().request_next())
    }

    /// Run the catalog request for `ticket`.
    pub async fn fetch(&self, ticket: &FetchTicket) -> Result<Vec<CatalogProduct>, DiscountError> {
        self.client
            .search(ticket.query())
            .await
            .map_err(DiscountError::from)
    }

    /// Fold a fetch response back into the open picker.
    pub fn apply_fetch(
        &mut self,
        ticket: &FetchTicket,
        response: Result<Vec<CatalogProduct>, DiscountError>,
    ) -> FetchOutcome {
        match self.picker.as_mut() {
            Some(picker) => picker.pager_mut().apply(ticket, response),
            None => {
                warn!(query = %ticket.query().key(), "catalog response after picker closed");
                FetchOutcome::Stale
            }
        }
    }

    /// [`fetch`](Self::fetch) then [`apply_fetch`](Self::apply_fetch).
    pub async fn run_fetch(&mut self, ticket: FetchTicket) -> FetchOutcome {
        let response = self.fetch(&ticket).await;
        self.apply_fetch(&ticket, response)
    }

    /// Toggle a listed product with all of its variants.
    pub fn toggle_product(&mut self, product: &ProductId) -> Result<bool, BuilderError> {
        let product = self.listed(product)?.clone();
        let selected = self.picker_mut()?.selection_mut().toggle_product(&product);
        debug!(product = %product.id, selected, "product toggled");
        Ok(selected)
    }

    /// Toggle one variant of a listed product.
    pub fn toggle_variant(
        &mut self,
        product: &ProductId,
        variant: &VariantId,
    ) -> Result<bool, BuilderError> {
        let product = self.listed(product)?.clone();
        let variant = product
            .variant(variant)
            .cloned()
            .ok_or_else(|| DiscountError::VariantNotFound(variant.clone()))?;
        let selected = self
            .picker_mut()?
            .selection_mut()
            .toggle_variant(&product, &variant);
        debug!(product = %product.id, variant = %variant.id, selected, "variant toggled");
        Ok(selected)
    }

    /// Close the picker and replace its target row with the selection.
    ///
    /// The target is located by identity, wherever list edits have moved it.
    /// Returns the identities of the inserted rows. With nothing selected the
    /// configured [`EmptyConfirm`](discount_core::rows::EmptyConfirm) applies.
    /// If the target row was removed meanwhile, the picker closes and the
    /// list is left as it is.
    pub fn confirm_picker(&mut self) -> Result<Vec<RowId>, BuilderError> {
        let picker = self.picker.take().ok_or(BuilderError::PickerClosed)?;
        let target = picker.target();
        let Some(index) = self.list.position(&target) else {
            warn!(row = %target, "picker target removed, selection discarded");
            picker.cancel();
            return Err(BuilderError::TargetRowRemoved(target));
        };

        let entries = picker.confirm();
        let inserted = self
            .list
            .replace_range(index, &entries, self.config.picker.empty_confirm)?;
        info!(row = %target, index, inserted = inserted.len(), rows = self.list.len(), "selection applied");
        Ok(inserted)
    }

    /// Close the picker without touching the list.
    pub fn cancel_picker(&mut self) -> Result<(), BuilderError> {
        let picker = self.picker.take().ok_or(BuilderError::PickerClosed)?;
        picker.cancel();
        Ok(())
    }
}
