//! Paginated catalog results for the picker.
//!
//! Each fetch is described by a [`FetchTicket`]. A ticket is only honored
//! while it matches the pager's current generation and next page; resetting
//! the search bumps the generation so responses for an older term are
//! discarded when they arrive.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::CatalogProduct;
use crate::error::DiscountError;
use crate::search::{CatalogQuery, DEFAULT_PAGE_SIZE};

/// Scroll position of the results viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, client_height: f64, scroll_height: f64) -> Self {
        Self {
            scroll_top,
            client_height,
            scroll_height,
        }
    }

    /// Whether the viewport is within `threshold` pixels of the bottom.
    pub fn near_bottom(&self, threshold: f64) -> bool {
        self.scroll_height - self.scroll_top <= self.client_height + threshold
    }
}

/// A single outstanding catalog request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    query: CatalogQuery,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }
}

/// Result of applying a fetch response.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Results appended.
    Applied { received: usize, has_more: bool },
    /// The fetch failed; results and `has_more` are unchanged.
    Failed(DiscountError),
    /// The response belongs to an older search or page and was dropped.
    Stale,
}

/// Pagination state of the picker's result list.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPager {
    search_term: String,
    page_size: usize,
    /// Page of the most recent request.
    page: u32,
    /// Page the next request will ask for; equals the number of loaded pages.
    next_page: u32,
    has_more: bool,
    loading: bool,
    generation: u64,
    results: Vec<CatalogProduct>,
    notice: Option<String>,
}

impl CatalogPager {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            page_size: page_size.max(1),
            page: 0,
            next_page: 0,
            has_more: true,
            loading: false,
            generation: 0,
            results: Vec::new(),
            notice: None,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn results(&self) -> &[CatalogProduct] {
        &self.results
    }

    /// Inline notice left by the last failed fetch.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// All pages loaded and at least one product shown.
    pub fn is_exhausted(&self) -> bool {
        !self.has_more && !self.results.is_empty()
    }

    fn ticket(&mut self, page: u32) -> FetchTicket {
        self.page = page;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            query: CatalogQuery::new(self.search_term.clone(), page, self.page_size),
        }
    }

    /// Start over with `term`: page 0, no results, a new generation.
    ///
    /// Any fetch still in flight becomes stale.
    pub fn reset(&mut self, term: impl Into<String>) -> FetchTicket {
        self.search_term = term.into();
        self.generation += 1;
        self.next_page = 0;
        self.has_more = true;
        self.results.clear();
        self.notice = None;
        debug!(term = %self.search_term, generation = self.generation, "catalog search reset");
        self.ticket(0)
    }

    /// Ticket for the next page, unless a fetch is in flight or the results
    /// are exhausted.
    pub fn request_next(&mut self) -> Option<FetchTicket> {
        if self.loading || !self.has_more {
            return None;
        }
        let page = self.next_page;
        Some(self.ticket(page))
    }

    /// Request the next page when the viewport nears the bottom.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics, threshold: f64) -> Option<FetchTicket> {
        if !metrics.near_bottom(threshold) {
            return None;
        }
        self.request_next()
    }

    /// Drop whatever is in flight without touching the results.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.loading = false;
    }

    fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.loading && ticket.generation == self.generation && ticket.query.page == self.next_page
    }

    /// Apply the response for `ticket`.
    pub fn apply(
        &mut self,
        ticket: &FetchTicket,
        response: Result<Vec<CatalogProduct>, DiscountError>,
    ) -> FetchOutcome {
        if !self.is_current(ticket) {
            warn!(
                query = %ticket.query.key(),
                generation = ticket.generation,
                current = self.generation,
                "stale catalog response discarded"
            );
            return FetchOutcome::Stale;
        }
        self.loading = false;

        match response {
            Ok(products) => {
                let received = products.len();
                if received < self.page_size {
                    self.has_more = false;
                }
                self.results.extend(products);
                self.next_page += 1;
                self.notice = None;
                debug!(
                    query = %ticket.query.key(),
                    received,
                    total = self.results.len(),
                    has_more = self.has_more,
                    "catalog page applied"
                );
                FetchOutcome::Applied {
                    received,
                    has_more: self.has_more,
                }
            }
            Err(err) => {
                warn!(query = %ticket.query.key(), error = %err, "catalog fetch failed");
                self.notice = Some(err.to_string());
                FetchOutcome::Failed(err)
            }
        }
    }
}

impl Default for CatalogPager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
