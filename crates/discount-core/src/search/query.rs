//! Catalog search query.

use serde::{Deserialize, Serialize};

/// Number of products requested per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page request against the catalog search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Search term; empty matches everything.
    pub search: String,
    /// Page index (0-indexed).
    pub page: u32,
    /// Page size.
    pub limit: usize,
}

impl CatalogQuery {
    /// Create a query for `page` of `search`.
    pub fn new(search: impl Into<String>, page: u32, limit: usize) -> Self {
        Self {
            search: search.into(),
            page,
            limit: limit.max(1),
        }
    }

    /// Offset of the first product on this page.
    pub fn offset(&self) -> usize {
        self.page as usize * self.limit
    }

    /// Encode as `search=..&page=..&limit=..`.
    pub fn to_query_string(&self) -> String {
        format!(
            "search={}&page={}&limit={}",
            urlencoding::encode(&self.search),
            self.page,
            self.limit
        )
    }

    /// Full request URL for `endpoint`.
    pub fn url(&self, endpoint: &str) -> String {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}{}", endpoint, separator, self.to_query_string())
    }

    /// Cache/log key for this query.
    pub fn key(&self) -> String {
        format!(
            "catalog:{}:{}:{}",
            self.search.to_lowercase().replace(' ', "_"),
            self.page,
            self.limit
        )
    }
}
