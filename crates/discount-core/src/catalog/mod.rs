//! Catalog module.
//!
//! Read-only products and variants as returned by the remote catalog.

mod product;

pub use product::{CatalogProduct, ProductImage, Variant};
