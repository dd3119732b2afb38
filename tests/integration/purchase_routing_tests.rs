use std::sync::{Arc, Mutex};

use super::{build_integration_test, catalog, item, usd, ProductId};
use purchase_table::{CatalogViewModel, PriceDisplay, PurchaseTable, RowModel, TestHost};

#[test]
fn given_reordered_catalog_when_tapped_should_route_current_product() {
    let mut test = build_integration_test().build();
    let a = item("a", PriceDisplay::Free, true);
    let b = item("b", usd("0.99"), true);

    test.table.bind(catalog(vec![a.clone(), b.clone()], None));
    test.table.bind(catalog(vec![b, a], None));

    assert!(test.host.tap(0));
    assert!(test.host.tap(1));
    assert_eq!(test.intents.drain(), vec![ProductId("b"), ProductId("a")]);
}

#[test]
fn given_disabled_row_when_tapped_should_not_route() {
    let mut test = build_integration_test().build();
    test.table.bind(catalog(vec![item("a", usd("4.99"), false)], None));

    assert!(!test.host.tap(0));
    assert!(test.intents.is_empty());
}

#[test]
fn given_footer_row_when_tapped_should_not_route() {
    let mut test = build_integration_test().build();
    test.table.bind(catalog(vec![item("a", PriceDisplay::Free, true)], Some("footer")));

    assert!(!test.host.tap(1));
    assert!(test.intents.is_empty());
}

#[test]
fn given_enabled_row_when_tapped_should_invoke_handler_exactly_once() {
    let purchases = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&purchases);
    let host = TestHost::new();
    let mut table = PurchaseTable::new(move |product: u32| sink.lock().unwrap().push(product))
        .build(host.clone());

    table.bind(CatalogViewModel::new(
        vec![RowModel::new(42, "42 coins", "", PriceDisplay::Free, true)],
        None,
    ));
    host.tap(0);

    assert_eq!(*purchases.lock().unwrap(), vec![42]);
}

#[test]
fn given_queued_tap_should_deliver_intent_to_blocking_reader() {
    let mut test = build_integration_test().build();
    test.table.bind(catalog(vec![item("gems", usd("19.99"), true)], None));

    test.host.tap(0);

    assert_eq!(test.intents.next_blocking(), Some(ProductId("gems")));
    assert_eq!(test.intents.try_next(), None);
}

#[test]
fn given_handler_that_starts_busy_indicator_through_host_when_tapped_should_not_block() {
    let host = TestHost::new();
    let flow_host = host.clone();
    let mut table = PurchaseTable::new(move |_product: u32| {
        flow_host.with_slots_mut(|slots| slots[0].item_mut().unwrap().busy_mut().start());
    })
    .build(host.clone());
    table.bind(CatalogViewModel::new(
        vec![RowModel::new(7, "7 coins", "", PriceDisplay::Free, true)],
        None,
    ));

    let (done, finished) = std::sync::mpsc::channel();
    let tapping_host = host.clone();
    std::thread::spawn(move || {
        done.send(tapping_host.tap(0)).ok();
    });

    let routed = finished.recv_timeout(std::time::Duration::from_secs(3));
    assert_eq!(routed, Ok(true));
    host.with_slots(|slots| assert!(slots[0].item().unwrap().busy().is_animating()));
}
