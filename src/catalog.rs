//! Immutable catalog snapshots bound to the table.

use crate::mapper::{self, RowKind};
use crate::price::PriceDisplay;

/// One purchasable entry.
///
/// `P` is the opaque product handle forwarded to the purchase handler when the
/// row's action control is tapped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowModel<P> {
    product: P,
    title: String,
    subtitle: String,
    price: PriceDisplay,
    on_sale: bool,
}

impl<P> RowModel<P> {
    pub fn new(
        product: P,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        price: PriceDisplay,
        on_sale: bool,
    ) -> Self {
        Self {
            product,
            title: title.into(),
            subtitle: subtitle.into(),
            price,
            on_sale,
        }
    }

    pub fn product(&self) -> &P {
        &self.product
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn price(&self) -> &PriceDisplay {
        &self.price
    }

    /// Whether the entry can currently be purchased.
    pub fn on_sale(&self) -> bool {
        self.on_sale
    }
}

/// Ordered purchasable entries plus an optional trailing footer text.
///
/// Equality is structural: two catalogs are equal when their items are equal
/// in order and their footers are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogViewModel<P> {
    items: Vec<RowModel<P>>,
    footer: Option<String>,
}

impl<P> CatalogViewModel<P> {
    pub fn new(items: Vec<RowModel<P>>, footer: Option<String>) -> Self {
        Self { items, footer }
    }

    /// A catalog with no items and no footer.
    pub fn empty() -> Self {
        Self::new(Vec::new(), None)
    }

    pub fn items(&self) -> &[RowModel<P>] {
        &self.items
    }

    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    /// Number of rows this catalog occupies in the host list.
    pub fn row_count(&self) -> usize {
        mapper::row_count(self.items.len(), self.footer.is_some())
    }

    /// # Panics
    ///
    /// Panics if `index >= self.row_count()`.
    pub fn kind(&self, index: usize) -> RowKind {
        mapper::resolve(index, self.items.len(), self.footer.is_some())
    }

    /// The content displayed at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.row_count()`.
    pub fn row(&self, index: usize) -> Row<'_, P> {
        match (self.kind(index), self.footer.as_deref()) {
            (RowKind::Item(i), _) => Row::Item(&self.items[i]),
            (RowKind::Footer, Some(text)) => Row::Footer(text),
            (RowKind::Footer, None) => unreachable!("footer row resolved without footer text"),
        }
    }
}

impl<P> Default for CatalogViewModel<P> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Content resolved for a single row.
#[derive(Debug, PartialEq, Eq)]
pub enum Row<'a, P> {
    Item(&'a RowModel<P>),
    Footer(&'a str),
}
