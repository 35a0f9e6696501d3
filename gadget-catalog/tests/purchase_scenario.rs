use gadget_catalog::{CatalogError, Collection, ExtrasLimit, Item, ItemRef, ItemType};
use std::sync::Arc;

fn wireless_controller() -> ItemRef {
    let mut controller = Item::priced(ItemType::Controller, 2.49).unwrap();
    controller.set_max_extras(ExtrasLimit::AtMost(0));
    controller.into_shared()
}

fn wired_controller() -> ItemRef {
    let mut controller = Item::priced(ItemType::Controller, 2.0).unwrap();
    controller.set_max_extras(ExtrasLimit::AtMost(0));
    controller.set_wired();
    controller.into_shared()
}

#[test]
fn test_purchase_sorting_and_total() {
    let purchases = Collection::new(vec![
        Item::priced(ItemType::Console, 9.99).unwrap().into_shared(),
        Item::priced(ItemType::Television, 29.99).unwrap().into_shared(),
        Item::priced(ItemType::Television, 39.99).unwrap().into_shared(),
        Item::priced(ItemType::Microwave, 20.99).unwrap().into_shared(),
    ]);

    let sorted: Vec<f64> = purchases
        .sorted_items()
        .values()
        .map(|item| item.price_only())
        .collect();
    assert_eq!(sorted, vec![9.99, 20.99, 29.99, 39.99]);
    assert_eq!(purchases.item_count(), 4);
    assert!((purchases.price() - 100.96).abs() < 1e-9);
}

#[test]
fn test_console_without_room_for_extras() {
    let mut console = Item::priced(ItemType::Console, 9.99).unwrap();
    console.set_max_extras(ExtrasLimit::from_raw(0).unwrap());

    let err = console.add_extras(vec![wireless_controller()]).unwrap_err();
    assert_eq!(err, CatalogError::CapacityExceeded { limit: 0, requested: 1 });
    assert!(console.extras().is_none());

    // An empty list still fits
    console.add_extras(Vec::new()).unwrap();
    assert_eq!(console.price_with_extras(), 9.99);
}

#[test]
fn test_console_price_with_shared_controllers() {
    let wireless = wireless_controller();
    let wired = wired_controller();

    let mut console = Item::priced(ItemType::Console, 9.99).unwrap();
    console.set_max_extras(ExtrasLimit::AtMost(4));
    console
        .add_extras(vec![wireless.clone(), wireless.clone(), wired.clone(), wired.clone()])
        .unwrap();

    let mut television = Item::priced(ItemType::Television, 29.99).unwrap();
    television.add_extras(vec![wireless.clone(), wireless.clone()]).unwrap();

    assert!((console.price_with_extras() - 18.97).abs() < 1e-9);
    assert!((television.price_with_extras() - 34.97).abs() < 1e-9);

    // The same controller instance backs every attachment
    let extras = console.extras().unwrap();
    assert!(Arc::ptr_eq(&extras.items_by_type("controller")[0], &wireless));
    assert_eq!(extras.items_of_type(ItemType::Controller).len(), 4);
    assert_eq!(Arc::strong_count(&wireless), 5);
}

#[test]
fn test_filter_purchases_by_type() {
    let television_a = Item::priced(ItemType::Television, 29.99).unwrap().into_shared();
    let television_b = Item::priced(ItemType::Television, 39.99).unwrap().into_shared();
    let purchases = Collection::new(vec![
        Item::priced(ItemType::Console, 9.99).unwrap().into_shared(),
        television_a.clone(),
        television_b.clone(),
        Item::priced(ItemType::Microwave, 20.99).unwrap().into_shared(),
    ]);

    let televisions = purchases.items_by_type("television");
    assert_eq!(televisions.len(), 2);
    assert!(Arc::ptr_eq(&televisions[0], &television_a));
    assert!(Arc::ptr_eq(&televisions[1], &television_b));

    assert_eq!(purchases.items_by_type("console").len(), 1);
    assert!(purchases.items_by_type("controller").is_empty());
    assert!(purchases.items_by_type("toaster").is_empty());
}
