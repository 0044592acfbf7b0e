//! Product list module.
//!
//! Contains the rows shown on the page and the ordered list that owns them.

mod list;
mod row;

pub use list::{EmptyConfirm, RootList};
pub use row::Row;
