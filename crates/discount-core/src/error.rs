//! Discount builder error types.

use thiserror::Error;

use crate::ids::VariantId;

/// Errors that can occur while editing the product list or the picker.
///
/// Every error is recoverable: the operation that produced it left the
/// state it addressed untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiscountError {
    /// A row or position outside the current bounds was addressed.
    #[error("Invalid index {index} (length {len})")]
    InvalidIndex { index: usize, len: usize },

    /// Attempted to remove the last remaining row.
    #[error("Cannot remove the last remaining row")]
    EmptyRootList,

    /// The catalog request failed (transport or decode).
    #[error("Catalog fetch failed: {0}")]
    FetchFailure(String),

    /// A variant list would contain the same variant twice.
    #[error("Duplicate variant: {0}")]
    DuplicateVariant(VariantId),

    /// Variant not present in the addressed row.
    #[error("Variant not found: {0}")]
    VariantNotFound(VariantId),

    /// Unknown discount type token.
    #[error("Invalid discount type: {0}")]
    InvalidDiscountType(String),
}

impl DiscountError {
    pub(crate) fn invalid_index(index: usize, len: usize) -> Self {
        DiscountError::InvalidIndex { index, len }
    }
}
