//! View-model binding and row materialization for purchasable-item lists.
//!
//! Binds immutable catalog snapshots to a host-owned scrollable list, writes
//! row content into the slots the host lends, and routes purchase taps back to
//! a caller-supplied handler.
//!
//! - [`BindingEngine::bind`] skips all rendering work when the incoming
//!   catalog equals the displayed one, and otherwise asks the host for a full
//!   reload.
//! - Row indices map onto the item list followed by an optional footer row
//!   (see [`mapper`]).
//! - Each item row's action control is enabled only while the entry is on
//!   sale, its busy indicator is reset on every bind, and its tap handler
//!   always routes the product currently shown in that slot.
//! - Prices are formatted with each row's own locale in effect.
//!
//! ## Example
//!
//! ```rust
//! use purchase_table::{
//!     CatalogViewModel, ControlColor, PriceDisplay, PurchaseRouter, PurchaseTable, RowModel,
//!     TestHost,
//! };
//!
//! let (router, intents) = PurchaseRouter::channel();
//! let host = TestHost::new();
//! let mut table = PurchaseTable::with_router(router).build(host.clone());
//!
//! table.bind(CatalogViewModel::new(
//!     vec![
//!         RowModel::new("coins_100", "100", "Starter pack", PriceDisplay::Free, true),
//!         RowModel::new(
//!             "coins_1000",
//!             "1000",
//!             "Best value",
//!             PriceDisplay::localized("9.99", "en_US").unwrap(),
//!             false,
//!         ),
//!     ],
//!     Some("Taxes included".to_string()),
//! ));
//!
//! host.with_slots(|slots| {
//!     let pricey = slots[1].item().unwrap().action();
//!     assert_eq!(pricey.title(), "$9.99");
//!     assert_eq!(pricey.color(), ControlColor::Muted);
//! });
//!
//! assert!(host.tap(0));
//! assert!(!host.tap(1));
//! assert_eq!(intents.drain(), vec!["coins_100"]);
//! ```

// Module declarations
mod catalog;
mod engine;
mod error;
mod host;
pub mod mapper;
mod price;
mod renderer;
mod router;
mod slot;
mod style;
mod table;

// Public re-exports
pub use catalog::{CatalogViewModel, Row, RowModel};
pub use engine::{BindOutcome, BindingEngine};
pub use error::{PriceError, RowIndexError, StyleError};
pub use host::{ListHost, RowSource};
pub use mapper::RowKind;
pub use price::{
    CurrencyFormatter, LocaleScope, PriceAmount, PriceDisplay, PriceFormatter, MAX_SCALE,
};
pub use renderer::RowRenderer;
pub use router::{PurchaseIntents, PurchaseRouter};
pub use slot::{
    ActionControl, BusyIndicator, ControlColor, FooterChrome, Icon, ItemChrome, Label,
    LayoutDirection, RowSlot, SlotState, TextAlignment,
};
pub use style::{Padding, TableStyle};
pub use table::PurchaseTable;

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use host::TestHost;
