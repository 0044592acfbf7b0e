//! Product discount page session.
//!
//! [`DiscountBuilder`] owns the product list, at most one open picker and the
//! catalog client, and exposes every action the page offers. Rendering reads
//! [`DiscountBuilder::view`].

pub mod builder;
pub mod config;
pub mod error;

pub use builder::DiscountBuilder;
pub use config::{BuilderConfig, CatalogConfig, PickerConfig, DEFAULT_ENDPOINT};
pub use error::BuilderError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::builder::DiscountBuilder;
    pub use crate::config::{BuilderConfig, CatalogConfig, PickerConfig};
    pub use crate::error::BuilderError;
    pub use discount_catalog::{CatalogClient, FetchError, InMemoryCatalog, RetryPolicy, RetryingCatalog};
    pub use discount_core::prelude::*;
}
