//! Error types for the page session.

use discount_core::{DiscountError, ProductId, RowId};
use thiserror::Error;

/// Errors returned by [`DiscountBuilder`](crate::DiscountBuilder) actions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuilderError {
    /// List, discount or fetch error.
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// A picker action arrived with no picker open.
    #[error("No product picker is open")]
    PickerClosed,

    /// Only one picker may be open at a time.
    #[error("A product picker is already open for {0}")]
    PickerAlreadyOpen(RowId),

    /// The row the picker was opened for was removed before confirmation.
    #[error("Picker target {0} is no longer in the list")]
    TargetRowRemoved(RowId),

    /// The product is not among the picker's loaded results.
    #[error("Product not listed in the picker: {0}")]
    ProductNotListed(ProductId),
}
