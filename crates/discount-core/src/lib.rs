//! Product discount builder state.
//!
//! This crate holds everything the discount page knows, independent of how
//! it is fetched or rendered:
//!
//! - **Rows**: the ordered product list with row-level discounts
//! - **Discount**: value/type edits and variant-to-row inheritance
//! - **Reorder**: the single-element move behind drag-and-drop
//! - **Picker**: the working selection and paginated catalog results
//! - **View**: render snapshots with resolved discounts
//!
//! # Example
//!
//! ```rust
//! use discount_core::prelude::*;
//!
//! let mut list = RootList::new();
//! list.add_empty_row();
//! list.set_discount(0, DiscountEdit::value(10.0)).unwrap();
//!
//! let first = list.rows()[0].id;
//! let second = list.rows()[1].id;
//! list.reorder_rows(&first, &second);
//! assert_eq!(list.rows()[1].discount, Some(10.0));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod discount;
pub mod picker;
pub mod reorder;
pub mod rows;
pub mod search;
pub mod view;

pub use error::DiscountError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::DiscountError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{CatalogProduct, ProductImage, Variant};

    // Discount
    pub use crate::discount::{
        effective_discount, resolve_discount, DiscountEdit, DiscountType, EffectiveDiscount,
    };

    // Rows
    pub use crate::reorder::{reorder, Identified};
    pub use crate::rows::{EmptyConfirm, RootList, Row};

    // Picker
    pub use crate::picker::{
        CatalogPager, FetchOutcome, FetchTicket, PickerState, ScrollMetrics, SelectionEntry,
        SelectionIndicator, SelectionSet,
    };
    pub use crate::search::{CatalogQuery, DEFAULT_PAGE_SIZE};

    // View
    pub use crate::view::{ListView, PageView, PickerView, RowView, VariantView};
}
