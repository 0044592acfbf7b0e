//! End-to-end scenarios over the product list, the picker selection and the
//! catalog pager.

use discount_core::prelude::*;

fn usd(cents: i64) -> Money {
    Money::new(cents, Currency::USD)
}

fn catalog_page(start: usize, n: usize) -> Vec<CatalogProduct> {
    (start..start + n)
        .map(|i| {
            CatalogProduct::new(i.to_string(), format!("Product {i}"))
                .with_variant(Variant::new(format!("{i}-a"), i.to_string(), "A", usd(1000)))
                .with_variant(Variant::new(format!("{i}-b"), i.to_string(), "B", usd(1200)))
        })
        .collect()
}

#[test]
fn removing_middle_row_keeps_neighbours() {
    let mut list = RootList::new();
    let first = list.rows()[0].id;
    list.add_empty_row();
    let third = list.add_empty_row();
    assert_eq!(list.len(), 3);

    list.remove_row(1).unwrap();

    let ids: Vec<RowId> = list.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first, third]);
}

#[test]
fn variant_discount_inherits_or_overrides() {
    let product = CatalogProduct::new("R1", "Shirt")
        .with_variant(Variant::new("V1", "R1", "S", usd(2000)))
        .with_variant(Variant::new("V2", "R1", "M", usd(2000)));
    let mut list = RootList::new();
    list.replace_range(
        0,
        &[SelectionEntry {
            selected_variants: product.variants.clone(),
            product,
        }],
        EmptyConfirm::Keep,
    )
    .unwrap();
    list.set_discount(0, DiscountEdit::value(10.0)).unwrap();
    list.set_discount(0, DiscountEdit::Type(DiscountType::Percent)).unwrap();
    list.set_variant_discount(0, &VariantId::new("V2"), DiscountEdit::value(5.0))
        .unwrap();
    list.set_variant_discount(0, &VariantId::new("V2"), DiscountEdit::Type(DiscountType::Flat))
        .unwrap();

    let row = &list.rows()[0];
    assert_eq!(
        effective_discount(row, &row.selected_variants[0]),
        Some(EffectiveDiscount::new(10.0, DiscountType::Percent))
    );
    assert_eq!(
        effective_discount(row, &row.selected_variants[1]),
        Some(EffectiveDiscount::new(5.0, DiscountType::Flat))
    );

    // Changing the row moves the inheriting variant with it, not the override.
    list.set_discount(0, DiscountEdit::value(20.0)).unwrap();
    list.set_discount(0, DiscountEdit::Type(DiscountType::Flat)).unwrap();
    let row = &list.rows()[0];
    assert_eq!(
        effective_discount(row, &row.selected_variants[0]),
        Some(EffectiveDiscount::new(20.0, DiscountType::Flat))
    );
    assert_eq!(
        effective_discount(row, &row.selected_variants[1]),
        Some(EffectiveDiscount::new(5.0, DiscountType::Flat))
    );
}

#[test]
fn removing_single_row_is_rejected() {
    let mut list = RootList::new();
    let before = list.rows().to_vec();
    assert_eq!(list.remove_row(0), Err(DiscountError::EmptyRootList));
    assert_eq!(list.rows(), before.as_slice());
}

#[test]
fn scrolling_loads_until_short_page() {
    let (mut picker, first) = PickerState::open(RowId::generate(), SelectionSet::new(), DEFAULT_PAGE_SIZE);
    let bottom = ScrollMetrics::new(900.0, 100.0, 1000.0);

    picker.pager_mut().apply(&first, Ok(catalog_page(0, 10)));
    let second = picker.pager_mut().on_scroll(bottom, 10.0).unwrap();
    assert_eq!(second.query().page, 1);
    picker.pager_mut().apply(&second, Ok(catalog_page(10, 4)));

    assert!(!picker.pager().has_more());
    assert_eq!(picker.pager().results().len(), 14);
    assert!(picker.pager_mut().on_scroll(bottom, 10.0).is_none());
}

#[test]
fn toggling_a_variant_twice_empties_selection() {
    let product = catalog_page(0, 1).remove(0);
    let mut selection = SelectionSet::new();
    selection.toggle_variant(&product, &product.variants[1]);
    selection.toggle_variant(&product, &product.variants[1]);
    assert!(selection.is_empty());
    assert!(!selection.is_product_selected(&product.id));
}

#[test]
fn confirmed_selection_replaces_only_target_row() {
    let mut list = RootList::new();
    list.add_empty_row();
    list.add_empty_row();
    let before: Vec<RowId> = list.rows().iter().map(|r| r.id).collect();

    let (mut picker, ticket) = PickerState::open(before[1], SelectionSet::from_row(&list.rows()[1]), 10);
    let page = catalog_page(0, 3);
    picker.pager_mut().apply(&ticket, Ok(page.clone()));
    picker.selection_mut().toggle_product(&page[2]);
    picker.selection_mut().toggle_variant(&page[0], &page[0].variants[1]);

    let target = list.position(&picker.target()).unwrap();
    let entries = picker.confirm();
    list.replace_range(target, &entries, EmptyConfirm::Keep).unwrap();

    assert_eq!(list.len(), 4);
    assert_eq!(list.rows()[0].id, before[0]);
    assert_eq!(list.rows()[1].title, "Product 2");
    assert_eq!(list.rows()[2].display_title(), "B");
    assert_eq!(list.rows()[3].id, before[2]);
}

#[test]
fn cancelled_picker_leaves_list_untouched() {
    let mut list = RootList::new();
    let product = catalog_page(0, 1).remove(0);
    list.replace_range(
        0,
        &[SelectionEntry {
            selected_variants: vec![product.variants[0].clone()],
            product: product.clone(),
        }],
        EmptyConfirm::Keep,
    )
    .unwrap();
    let before = list.clone();

    let (mut picker, _) = PickerState::open(list.rows()[0].id, SelectionSet::from_row(&list.rows()[0]), 10);
    picker.selection_mut().toggle_variant(&product, &product.variants[0]);
    picker.selection_mut().toggle_variant(&product, &product.variants[1]);
    picker.cancel();

    assert_eq!(list, before);
}
