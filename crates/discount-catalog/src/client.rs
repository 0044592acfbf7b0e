//! Catalog client seam.

use async_trait::async_trait;
use discount_core::catalog::CatalogProduct;
use discount_core::search::CatalogQuery;
use discount_core::DiscountError;

/// Error type for catalog fetches.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),
}

impl From<FetchError> for DiscountError {
    fn from(e: FetchError) -> Self {
        DiscountError::FetchFailure(e.to_string())
    }
}

/// Searches the remote product catalog one page at a time.
///
/// Futures are not required to be `Send`: the picker drives fetches from a
/// single UI event loop.
#[async_trait(?Send)]
pub trait CatalogClient {
    /// Fetch one page of products matching `query`.
    ///
    /// A page shorter than `query.limit` means there are no further pages.
    async fn search(&self, query: &CatalogQuery) -> Result<Vec<CatalogProduct>, FetchError>;
}

#[async_trait(?Send)]
impl<C: CatalogClient + ?Sized> CatalogClient for Box<C> {
    async fn search(&self, query: &CatalogQuery) -> Result<Vec<CatalogProduct>, FetchError> {
        (**self).search(query).await
    }
}
