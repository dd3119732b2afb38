//! Entry point that assembles an engine from its collaborators.

use crate::engine::BindingEngine;
use crate::host::ListHost;
use crate::price::{CurrencyFormatter, PriceFormatter};
use crate::renderer::RowRenderer;
use crate::router::PurchaseRouter;
use crate::style::TableStyle;

/// Builder for a [`BindingEngine`].
///
/// Defaults to [`CurrencyFormatter`] in `en_US` and [`TableStyle::default`].
///
/// ```rust
/// use purchase_table::{CurrencyFormatter, PurchaseTable, TableStyle, TestHost};
///
/// let style = TableStyle {
///     free_label: "Gratis".to_string(),
///     ..TableStyle::default()
/// };
///
/// let table = PurchaseTable::new(|product: &'static str| println!("buy {product}"))
///     .style(style)
///     .formatter(CurrencyFormatter::new("es_ES"))
///     .build(TestHost::new());
///
/// assert_eq!(table.row_count(), 0);
/// ```
pub struct PurchaseTable<P, F = CurrencyFormatter> {
    router: PurchaseRouter<P>,
    formatter: F,
    style: TableStyle,
}

impl<P> PurchaseTable<P, CurrencyFormatter> {
    /// `purchase_handler` receives the product of every routed tap.
    pub fn new(purchase_handler: impl Fn(P) + Send + Sync + 'static) -> Self {
        Self::with_router(PurchaseRouter::new(purchase_handler))
    }

    pub fn with_router(router: PurchaseRouter<P>) -> Self {
        Self {
            router,
            formatter: CurrencyFormatter::default(),
            style: TableStyle::default(),
        }
    }
}

impl<P, F> PurchaseTable<P, F> {
    pub fn style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    pub fn formatter<G: PriceFormatter>(self, formatter: G) -> PurchaseTable<P, G> {
        PurchaseTable {
            router: self.router,
            formatter,
            style: self.style,
        }
    }
}

impl<P, F> PurchaseTable<P, F>
where
    P: Clone + PartialEq + Send + Sync + 'static,
    F: PriceFormatter,
{
    pub fn build<H: ListHost>(self, host: H) -> BindingEngine<P, F, H> {
        let renderer = RowRenderer::new(self.formatter, self.router, self.style);
        BindingEngine::new(renderer, host)
    }
}
