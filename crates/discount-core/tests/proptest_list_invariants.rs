//! Property-based invariant tests for the product list and the reorder engine.
//!
//! 1. Row identities stay pairwise unique under add/remove/replace.
//! 2. The list never drops below one row.
//! 3. Reorder preserves membership and the relative order of the others.
//! 4. Reorder onto itself is the identity.

use std::collections::HashSet;

use discount_core::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Item(u16);

impl Identified for Item {
    type Id = u16;

    fn identity(&self) -> &u16 {
        &self.0
    }
}

#[derive(Debug, Clone)]
enum Op {
    Add,
    Remove(usize),
    Replace(usize, usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Add),
        (0usize..8).prop_map(Op::Remove),
        (0usize..8, 0usize..4).prop_map(|(i, n)| Op::Replace(i, n)),
    ]
}

fn entries(n: usize) -> Vec<SelectionEntry> {
    (0..n)
        .map(|i| {
            let product = CatalogProduct::new(i.to_string(), format!("Product {i}")).with_variant(
                Variant::new("v", i.to_string(), "Default", Money::new(100, Currency::USD)),
            );
            SelectionEntry {
                selected_variants: product.variants.clone(),
                product,
            }
        })
        .collect()
}

fn unique_sequence() -> impl Strategy<Value = Vec<Item>> {
    proptest::collection::hash_set(any::<u16>(), 1..24)
        .prop_map(|set| set.into_iter().map(Item).collect())
        .prop_shuffle()
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Identity uniqueness and the minimum row
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn row_identities_stay_unique(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut list = RootList::new();
        for op in ops {
            match op {
                Op::Add => {
                    list.add_empty_row();
                }
                Op::Remove(i) => {
                    let _ = list.remove_row(i);
                }
                Op::Replace(i, n) => {
                    let _ = list.replace_range(i, &entries(n), EmptyConfirm::Clear);
                }
            }
            let ids: HashSet<RowId> = list.rows().iter().map(|r| r.id).collect();
            prop_assert_eq!(ids.len(), list.len());
            prop_assert!(list.len() >= 1);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Reorder preserves membership and relative order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reorder_preserves_membership(seq in unique_sequence(), a in any::<prop::sample::Index>(), b in any::<prop::sample::Index>()) {
        let from = seq[a.index(seq.len())].0;
        let to = seq[b.index(seq.len())].0;
        let out = reorder(&seq, &from, &to);

        let mut before: Vec<u16> = seq.iter().map(|i| i.0).collect();
        let mut after: Vec<u16> = out.iter().map(|i| i.0).collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);

        let others_before: Vec<u16> = seq.iter().map(|i| i.0).filter(|id| *id != from).collect();
        let others_after: Vec<u16> = out.iter().map(|i| i.0).filter(|id| *id != from).collect();
        prop_assert_eq!(others_before, others_after);

        let to_pos = seq.iter().position(|i| i.0 == to).unwrap();
        prop_assert_eq!(out[to_pos].0, from);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Reorder onto itself
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reorder_onto_self_is_identity(seq in unique_sequence(), a in any::<prop::sample::Index>()) {
        let x = seq[a.index(seq.len())].0;
        prop_assert_eq!(reorder(&seq, &x, &x), seq);
    }
}
