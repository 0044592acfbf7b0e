//! In-process catalog.

use async_trait::async_trait;
use discount_core::catalog::CatalogProduct;
use discount_core::search::CatalogQuery;

use crate::client::{CatalogClient, FetchError};

/// Serves searches from a fixed product list.
///
/// Matching is a case-insensitive substring test on the product title; an
/// empty term matches everything. Pages are cut from the matches in order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<CatalogProduct>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<CatalogProduct>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Synchronous form of [`CatalogClient::search`].
    pub fn page(&self, query: &CatalogQuery) -> Vec<CatalogProduct> {
        let needle = query.search.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| needle.is_empty() || p.title.to_lowercase().contains(&needle))
            .skip(query.offset())
            .take(query.limit)
            .cloned()
            .collect()
    }
}

#[async_trait(?Send)]
impl CatalogClient for InMemoryCatalog {
    async fn search(&self, query: &CatalogQuery) -> Result<Vec<CatalogProduct>, FetchError> {
        Ok(self.page(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(
            ["Linen Towel", "Wool Hat", "Cotton Towel", "Silk Scarf"]
                .iter()
                .enumerate()
                .map(|(i, t)| CatalogProduct::new(i.to_string(), *t))
                .collect(),
        )
    }

    #[test]
    fn test_filters_case_insensitively() {
        let hits = catalog().page(&CatalogQuery::new("TOWEL", 0, 10));
        let titles: Vec<&str> = hits.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Linen Towel", "Cotton Towel"]);
    }

    #[test]
    fn test_paginates() {
        let c = catalog();
        assert_eq!(c.page(&CatalogQuery::new("", 0, 3)).len(), 3);
        let second = c.page(&CatalogQuery::new("", 1, 3));
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].title, "Silk Scarf");
        assert!(c.page(&CatalogQuery::new("", 2, 3)).is_empty());
    }
}
