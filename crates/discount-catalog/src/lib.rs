//! Remote product catalog client.
//!
//! This crate provides:
//! - `CatalogClient` - Async search seam consumed by the picker
//! - `RetryingCatalog` / `RetryPolicy` - Retry strategies
//! - `CatalogEndpoint` / `SpinCatalogClient` - HTTP search over Spin (wasm32)
//! - `InMemoryCatalog` - Local catalog for development and tests
//! - `decode_products` - Search payload decoding

mod client;
mod endpoint;
mod memory;
mod retry;
mod wire;

pub use client::*;
pub use endpoint::*;
pub use memory::*;
pub use retry::*;
pub use wire::*;
