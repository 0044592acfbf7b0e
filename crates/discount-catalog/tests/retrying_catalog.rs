//! Retry behaviour against a scripted client.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use discount_catalog::{CatalogClient, FetchError, InMemoryCatalog, RetryPolicy, RetryingCatalog};
use discount_core::catalog::CatalogProduct;
use discount_core::search::CatalogQuery;
use discount_core::DiscountError;
use futures::executor::block_on;

struct Scripted {
    responses: RefCell<VecDeque<Result<Vec<CatalogProduct>, FetchError>>>,
    calls: RefCell<u32>,
}

impl Scripted {
    fn new(responses: Vec<Result<Vec<CatalogProduct>, FetchError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            calls: RefCell::new(0),
        }
    }

    fn calls(&self) -> u32 {
        *self.calls.borrow()
    }
}

#[async_trait(?Send)]
impl CatalogClient for Scripted {
    async fn search(&self, _query: &CatalogQuery) -> Result<Vec<CatalogProduct>, FetchError> {
        *self.calls.borrow_mut() += 1;
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

fn unavailable() -> FetchError {
    FetchError::Http {
        status: 503,
        url: "https://api.example.com".to_string(),
    }
}

fn query() -> CatalogQuery {
    CatalogQuery::new("", 0, 10)
}

#[test]
fn server_error_is_retried_once() {
    let client = RetryingCatalog::new(
        Scripted::new(vec![Err(unavailable()), Ok(vec![CatalogProduct::new("1", "Hat")])]),
        RetryPolicy::new(1),
    );

    let products = block_on(client.search(&query())).unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(client.inner().calls(), 2);
}

#[test]
fn retry_budget_is_respected() {
    let client = RetryingCatalog::new(
        Scripted::new(vec![Err(unavailable()), Err(unavailable()), Err(unavailable())]),
        RetryPolicy::new(1),
    );

    assert_eq!(block_on(client.search(&query())), Err(unavailable()));
    assert_eq!(client.inner().calls(), 2);
}

#[test]
fn decode_failures_are_not_retried() {
    let client = RetryingCatalog::new(
        Scripted::new(vec![Err(FetchError::Deserialization("bad".into()))]),
        RetryPolicy::new(3),
    );

    let err: DiscountError = block_on(client.search(&query())).unwrap_err().into();
    assert!(matches!(err, DiscountError::FetchFailure(_)));
    assert_eq!(client.inner().calls(), 1);
}

#[test]
fn in_memory_catalog_through_trait_object() {
    let client: Box<dyn CatalogClient> =
        Box::new(InMemoryCatalog::new(vec![CatalogProduct::new("1", "Hat")]));
    let products = block_on(client.search(&CatalogQuery::new("hat", 0, 10))).unwrap();
    assert_eq!(products[0].title, "Hat");
}
