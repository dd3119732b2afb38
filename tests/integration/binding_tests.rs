use super::{build_integration_test, catalog, item, usd};
use purchase_table::{BindOutcome, LayoutDirection, PriceDisplay, RowKind, TextAlignment};

#[test]
fn given_bound_catalog_when_equal_instance_rebound_should_do_no_row_work() {
    let mut test = build_integration_test().build();
    let first = catalog(
        vec![item("a", PriceDisplay::Free, true), item("b", usd("1.99"), true)],
        Some("Taxes included"),
    );
    let second = first.clone();

    assert_eq!(test.table.bind(first), BindOutcome::Refreshed);
    let reloads = test.host.reload_count();
    let materialized = test.host.materialized_rows();

    assert_eq!(test.table.bind(second), BindOutcome::Unchanged);

    assert_eq!(test.host.reload_count(), reloads);
    assert_eq!(test.host.materialized_rows(), materialized);
}

#[test]
fn given_any_catalog_shape_should_expose_items_plus_footer_rows() {
    for item_count in 0..5 {
        for footer in [None, Some("footer")] {
            let mut test = build_integration_test().build();
            let items = (0..item_count)
                .map(|i| item(["a", "b", "c", "d", "e"][i], PriceDisplay::Free, true))
                .collect();

            test.table.bind(catalog(items, footer));

            let expected = item_count + usize::from(footer.is_some());
            assert_eq!(test.table.row_count(), expected);
            assert_eq!(test.host.visible_rows(), expected);
        }
    }
}

#[test]
fn given_viewport_smaller_than_catalog_should_materialize_only_visible_rows() {
    let mut test = build_integration_test().given_viewport(2).build();

    test.table.bind(catalog(
        vec![
            item("a", PriceDisplay::Free, true),
            item("b", PriceDisplay::Free, true),
            item("c", PriceDisplay::Free, true),
        ],
        Some("footer"),
    ));

    assert_eq!(test.table.row_count(), 4);
    assert_eq!(test.host.visible_rows(), 2);
    assert_eq!(test.host.visible_kinds(), vec![RowKind::Item(0), RowKind::Item(1)]);
    assert_eq!(test.host.materialized_rows(), 2);
}

#[test]
fn given_footer_slot_when_reused_for_item_should_rebuild_chrome() {
    let mut test = build_integration_test().build();

    test.table.bind(catalog(vec![item("a", PriceDisplay::Free, true)], Some("footer")));
    test.host.with_slots(|slots| {
        assert!(slots[1].footer().is_some());
        assert_eq!(slots[1].chrome_builds(), 1);
    });

    test.table.bind(catalog(
        vec![item("a", PriceDisplay::Free, true), item("b", PriceDisplay::Free, true)],
        None,
    ));

    test.host.with_slots(|slots| {
        assert_eq!(slots[0].chrome_builds(), 1);
        assert_eq!(slots[1].chrome_builds(), 2);
        assert_eq!(slots[1].item().unwrap().title().text(), "b");
        assert!(slots[1].footer().is_none());
    });
}

#[test]
fn given_item_slots_when_rebound_should_not_rebuild_chrome() {
    let mut test = build_integration_test().build();

    test.table.bind(catalog(vec![item("a", PriceDisplay::Free, true)], None));
    test.table.bind(catalog(vec![item("b", usd("2.50"), false)], None));
    test.table.bind(catalog(vec![item("c", PriceDisplay::Free, true)], None));

    test.host.with_slots(|slots| {
        assert_eq!(slots[0].chrome_builds(), 1);
        assert_eq!(slots[0].item().unwrap().title().text(), "c");
    });
}

#[test]
fn given_layout_direction_change_when_refreshed_should_realign_every_row() {
    let mut test = build_integration_test()
        .given_layout_direction(LayoutDirection::RightToLeft)
        .build();
    test.table.bind(catalog(vec![item("a", PriceDisplay::Free, true)], Some("footer")));

    test.host.with_slots(|slots| {
        assert_eq!(slots[0].item().unwrap().title().alignment(), TextAlignment::Right);
        assert_eq!(slots[1].footer().unwrap().label().alignment(), TextAlignment::Right);
    });

    test.host.set_layout_direction(LayoutDirection::LeftToRight);
    test.table.refresh();

    test.host.with_slots(|slots| {
        assert_eq!(slots[0].item().unwrap().subtitle().alignment(), TextAlignment::Natural);
        assert_eq!(slots[1].footer().unwrap().label().alignment(), TextAlignment::Natural);
    });
}

#[test]
fn given_busy_indicator_started_when_catalog_changes_should_stop_it() {
    let mut test = build_integration_test().build();
    test.table.bind(catalog(vec![item("a", PriceDisplay::Free, true)], None));

    test.host.with_slots_mut(|slots| slots[0].item_mut().unwrap().busy_mut().start());
    test.table.bind(catalog(vec![item("a", PriceDisplay::Free, true)], None));

    // Equal catalog: no render pass, so the spinner is left alone.
    test.host.with_slots(|slots| assert!(slots[0].item().unwrap().busy().is_animating()));

    test.table.bind(catalog(vec![item("a", usd("0.99"), true)], None));

    test.host.with_slots(|slots| assert!(slots[0].item().unwrap().busy().is_hidden()));
}

#[test]
fn given_catalog_with_footer_should_report_items_then_footer_kinds() {
    let mut test = build_integration_test().build();

    test.table.bind(catalog(
        vec![item("a", PriceDisplay::Free, true), item("b", usd("3.00"), true)],
        Some("footer"),
    ));

    assert_eq!(
        test.host.visible_kinds(),
        vec![RowKind::Item(0), RowKind::Item(1), RowKind::Footer]
    );
}
