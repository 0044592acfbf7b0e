//! Search module.
//!
//! Contains the catalog search query sent for each page.

mod query;

pub use query::{CatalogQuery, DEFAULT_PAGE_SIZE};
