use super::{build_integration_test, catalog, item, usd, MockFormatter};
use purchase_table::{ControlColor, PriceAmount, PriceDisplay, TableStyle};

#[test]
fn given_unavailable_entry_should_render_disabled_muted_action() {
    let mut test = build_integration_test().build();

    test.table.bind(catalog(vec![item("a", usd("4.99"), false)], None));

    test.host.with_slots(|slots| {
        let action = slots[0].item().unwrap().action();
        assert!(!action.is_enabled());
        assert_eq!(action.color(), ControlColor::Muted);
        assert_eq!(test.table.renderer().style().color(action.color()), "#8e8e93");
    });
}

#[test]
fn given_available_entry_should_render_enabled_accent_action() {
    let mut test = build_integration_test().build();

    test.table.bind(catalog(vec![item("a", usd("4.99"), true)], None));

    test.host.with_slots(|slots| {
        let action = slots[0].item().unwrap().action();
        assert!(action.is_enabled());
        assert_eq!(action.color(), ControlColor::Accent);
    });
}

#[test]
fn given_localized_price_should_render_formatter_output() {
    let mut formatter = MockFormatter::new();
    formatter.expect_locale().returning(|| "fr_FR".to_string());
    formatter.expect_set_locale().returning(|_| ());
    formatter
        .expect_format()
        .withf(|amount: &PriceAmount| *amount == PriceAmount::new(499, 2))
        .times(1)
        .returning(|_| "$4.99".to_string());

    let mut test = build_integration_test().build_with_formatter(formatter);
    test.table.bind(catalog(vec![item("a", usd("4.99"), true)], None));

    test.host.with_slots(|slots| {
        assert_eq!(slots[0].item().unwrap().action().title(), "$4.99");
    });
}

#[test]
fn given_free_entry_should_render_configured_free_label() {
    let style = TableStyle {
        free_label: "Gratuit".to_string(),
        ..TableStyle::default()
    };
    let mut formatter = MockFormatter::new();
    formatter.expect_format().never();
    formatter.expect_set_locale().never();

    let mut test = build_integration_test()
        .given_style(style)
        .build_with_formatter(formatter);
    test.table.bind(catalog(vec![item("a", PriceDisplay::Free, true)], None));

    test.host.with_slots(|slots| {
        assert_eq!(slots[0].item().unwrap().action().title(), "Gratuit");
    });
}

#[test]
fn given_rows_in_different_locales_should_format_each_in_its_own_locale() {
    let mut test = build_integration_test().build();
    let yen = PriceDisplay::localized("500", "ja_JP").unwrap();
    let euro = PriceDisplay::localized("9.99", "de_DE").unwrap();

    test.table.bind(catalog(
        vec![item("a", yen, true), item("b", euro, true), item("c", usd("1234.5"), true)],
        None,
    ));

    test.host.with_slots(|slots| {
        let titles: Vec<_> = slots
            .iter()
            .map(|slot| slot.item().unwrap().action().title().to_string())
            .collect();
        assert_eq!(titles, vec!["¥500", "9,99 €", "$1,234.50"]);
    });
    assert_eq!(
        purchase_table::PriceFormatter::locale(test.table.renderer().formatter()),
        "en_US"
    );
}

#[test]
fn given_item_row_should_render_title_subtitle_and_icon() {
    let mut test = build_integration_test().build();

    test.table.bind(catalog(vec![item("coins_500", PriceDisplay::Free, true)], None));

    test.host.with_slots(|slots| {
        let chrome = slots[0].item().unwrap();
        assert_eq!(chrome.title().text(), "coins_500");
        assert_eq!(chrome.subtitle().text(), "coins_500 subtitle");
        assert_eq!(chrome.icon().asset(), "coin_large");
        assert!(chrome.busy().is_hidden());
        assert!(chrome.action().has_handler());
    });
}
