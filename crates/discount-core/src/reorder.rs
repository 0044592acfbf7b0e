//! Single-element move used by drag-and-drop reordering.
//!
//! The same algorithm orders rows in the product list and variants within a
//! row: the dragged element is taken out and reinserted at the position the
//! drop target occupied. Everything between the two positions shifts by one
//! slot; everything else keeps its place.

use crate::catalog::Variant;
use crate::ids::{RowId, VariantId};
use crate::rows::Row;

/// Elements with a stable identity within their sequence.
pub trait Identified {
    type Id: PartialEq;

    fn identity(&self) -> &Self::Id;
}

impl Identified for Row {
    type Id = RowId;

    fn identity(&self) -> &RowId {
        &self.id
    }
}

impl Identified for Variant {
    type Id = VariantId;

    fn identity(&self) -> &VariantId {
        &self.id
    }
}

/// Locate the positions of `from` and `to`, if both are present and distinct.
pub fn move_positions<T: Identified>(
    sequence: &[T],
    from: &T::Id,
    to: &T::Id,
) -> Option<(usize, usize)> {
    if from == to {
        return None;
    }
    let from_idx = sequence.iter().position(|item| item.identity() == from)?;
    let to_idx = sequence.iter().position(|item| item.identity() == to)?;
    Some((from_idx, to_idx))
}

/// Move the element identified by `from` to the position of `to`.
///
/// Returns the sequence unchanged when the identities are equal or either is
/// absent.
pub fn reorder<T: Identified + Clone>(sequence: &[T], from: &T::Id, to: &T::Id) -> Vec<T> {
    let mut next = sequence.to_vec();
    if let Some((from_idx, to_idx)) = move_positions(sequence, from, to) {
        move_element(&mut next, from_idx, to_idx);
    }
    next
}

/// Move by position. Out-of-range positions leave the sequence as is.
pub fn move_element<T>(sequence: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= sequence.len() || to >= sequence.len() {
        return false;
    }
    let item = sequence.remove(from);
    sequence.insert(to, item);
    true
}
