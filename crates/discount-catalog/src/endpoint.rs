//! HTTP catalog search endpoint.

use discount_core::search::CatalogQuery;

/// Where and how to reach the remote catalog search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEndpoint {
    url: String,
    api_key: Option<String>,
}

impl CatalogEndpoint {
    /// Header carrying the API key.
    pub const API_KEY_HEADER: &'static str = "x-api-key";

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Full request URL for `query`.
    pub fn request_url(&self, query: &CatalogQuery) -> String {
        query.url(&self.url)
    }

    /// Headers attached to every search request.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("accept", "application/json".to_string())];
        if let Some(key) = &self.api_key {
            headers.push((Self::API_KEY_HEADER, key.clone()));
        }
        headers
    }
}

#[cfg(target_arch = "wasm32")]
pub use spin::SpinCatalogClient;

#[cfg(target_arch = "wasm32")]
mod spin {
    use async_trait::async_trait;
    use discount_core::catalog::CatalogProduct;
    use discount_core::search::CatalogQuery;
    use tracing::debug;

    use super::CatalogEndpoint;
    use crate::client::{CatalogClient, FetchError};
    use crate::wire::decode_products;

    /// Catalog client over Spin outbound HTTP.
    #[derive(Debug, Clone)]
    pub struct SpinCatalogClient {
        endpoint: CatalogEndpoint,
    }

    impl SpinCatalogClient {
        pub fn new(endpoint: CatalogEndpoint) -> Self {
            Self { endpoint }
        }
    }

    #[async_trait(?Send)]
    impl CatalogClient for SpinCatalogClient {
        async fn search(&self, query: &CatalogQuery) -> Result<Vec<CatalogProduct>, FetchError> {
            let url = self.endpoint.request_url(query);

            let mut builder = spin_sdk::http::Request::get(url.as_str());
            for (name, value) in self.endpoint.headers() {
                builder.header(name, value);
            }
            let req = builder.build();

            let resp: spin_sdk::http::Response = spin_sdk::http::send(req)
                .await
                .map_err(|e| FetchError::Request(e.to_string()))?;

            let status = resp.status();
            if *status >= 400 {
                return Err(FetchError::Http {
                    status: *status,
                    url,
                });
            }

            let products = decode_products(resp.body())?;
            debug!(key = %query.key(), received = products.len(), "Catalog page fetched");
            Ok(products)
        }
    }
}
