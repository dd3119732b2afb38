//! Renders a coin storefront as plain text rows and simulates a few taps.
//!
//! Run with `RUST_LOG=purchase_table=trace` to see bind and routing traces.

use purchase_table::{
    CatalogViewModel, LayoutDirection, ListHost, PriceDisplay, PurchaseRouter, PurchaseTable,
    RowModel, RowSlot, RowSource, SlotState, TableStyle, TextAlignment,
};
use tracing_subscriber::EnvFilter;

const WIDTH: usize = 48;

struct TerminalHost {
    slots: Vec<RowSlot>,
    direction: LayoutDirection,
}

impl TerminalHost {
    fn print(&self, style: &TableStyle) {
        println!("{}", "-".repeat(WIDTH));
        for slot in &self.slots {
            match slot.state() {
                SlotState::Item(chrome) => {
                    let action = chrome.action();
                    let marker = if action.is_enabled() { ' ' } else { 'x' };
                    let text = format!(
                        "[{}] {} - {}",
                        chrome.icon().asset(),
                        chrome.title().text(),
                        chrome.subtitle().text()
                    );
                    println!(
                        "{} {marker}[{}] ({})",
                        align(&text, chrome.title().alignment(), WIDTH - 20),
                        action.title(),
                        style.color(action.color())
                    );
                }
                SlotState::Footer(chrome) => {
                    let indent = " ".repeat(usize::from(chrome.padding().leading / 10));
                    let label = chrome.label();
                    println!("{indent}{}", align(label.text(), label.alignment(), WIDTH));
                }
                SlotState::Uninitialized => println!(),
            }
        }
    }
}

fn align(text: &str, alignment: TextAlignment, width: usize) -> String {
    match alignment {
        TextAlignment::Natural => format!("{text:<width$}"),
        TextAlignment::Right => format!("{text:>width$}"),
    }
}

impl ListHost for TerminalHost {
    fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }

    fn reload(&mut self, rows: &mut dyn RowSource) {
        self.slots.resize_with(rows.row_count(), RowSlot::new);
        for (index, slot) in self.slots.iter_mut().enumerate() {
            rows.materialize(index, slot);
        }
    }
}

fn storefront(bulk_on_sale: bool) -> CatalogViewModel<&'static str> {
    let price = |amount: &str, locale: &str| {
        PriceDisplay::localized(amount, locale).unwrap_or(PriceDisplay::Free)
    };
    CatalogViewModel::new(
        vec![
            RowModel::new("coins_100", "100", "Starter pile", PriceDisplay::Free, true),
            RowModel::new("coins_1000", "1000", "Weekend supply", price("4.99", "en_US"), true),
            RowModel::new(
                "coins_5000",
                "5000",
                "Bulk chest",
                price("19.99", "de_DE"),
                bulk_on_sale,
            ),
        ],
        Some("Prices include applicable taxes.".to_string()),
    )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (router, intents) = PurchaseRouter::channel();
    let style = TableStyle::default();
    let host = TerminalHost {
        slots: Vec::new(),
        direction: LayoutDirection::LeftToRight,
    };
    let mut table = PurchaseTable::with_router(router)
        .style(style.clone())
        .build(host);

    table.bind(storefront(false));
    table.host().print(&style);

    // Same content again: no reload.
    table.bind(storefront(false));

    for index in 0..table.row_count() {
        let routed = table.host().slots[index].item().is_some_and(|chrome| chrome.action().tap());
        println!("tap row {index}: {}", if routed { "routed" } else { "ignored" });
    }

    table.bind(storefront(true));
    table.host_mut().direction = LayoutDirection::RightToLeft;
    table.refresh();
    table.host().print(&style);

    for product in intents.drain() {
        println!("purchase requested: {product}");
    }
}
