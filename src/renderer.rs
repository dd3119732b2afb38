//! Row materialization: writes catalog content into host slots.

use portable_atomic_util::Arc;

use crate::catalog::RowModel;
use crate::price::{LocaleScope, PriceDisplay, PriceFormatter};
use crate::router::PurchaseRouter;
use crate::slot::{FooterChrome, ItemChrome, LayoutDirection, RowSlot};
use crate::style::TableStyle;

/// Materializes item and footer rows into [`RowSlot`]s.
///
/// Static chrome is built at most once per slot and row kind. Everything that
/// depends on the row's data or on the layout direction is rewritten on every
/// call, so a recycled slot never shows state left over from its previous row.
pub struct RowRenderer<P, F> {
    formatter: F,
    router: Arc<PurchaseRouter<P>>,
    style: TableStyle,
}

impl<P, F> RowRenderer<P, F>
where
    P: Clone + Send + Sync + 'static,
    F: PriceFormatter,
{
    pub fn new(formatter: F, router: PurchaseRouter<P>, style: TableStyle) -> Self {
        Self {
            formatter,
            router: Arc::new(router),
            style,
        }
    }

    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Materialize or update an item row.
    pub fn render_item(
        &mut self,
        row: &RowModel<P>,
        slot: &mut RowSlot,
        direction: LayoutDirection,
    ) {
        let price = self.price_text(row.price());

        let style = &self.style;
        let chrome = slot.item_chrome_or_insert_with(|| {
            tracing::trace!("building item row chrome");
            ItemChrome::new(&style.icon, style.content_insets)
        });
        let (title, subtitle, action, busy) = chrome.parts_mut();

        let alignment = direction.alignment();
        title.set(row.title(), alignment);
        subtitle.set(row.subtitle(), alignment);

        // Replaced on every update so the tap always routes this row's product.
        let router = Arc::clone(&self.router);
        let product = row.product().clone();
        let handler: Box<dyn Fn() + Send + Sync> = Box::new(move || router.route(product.clone()));
        action.set_handler(Arc::new(handler));

        action.set_available(row.on_sale());
        busy.stop();
        action.set_title(price);
    }

    /// Materialize or update the footer row.
    pub fn render_footer(&self, text: &str, slot: &mut RowSlot, direction: LayoutDirection) {
        let padding = self.style.footer_padding;
        let chrome = slot.footer_chrome_or_insert_with(|| {
            tracing::trace!("building footer row chrome");
            FooterChrome::new(padding)
        });
        chrome.label_mut().set(text, direction.alignment());
    }

    /// Action title for a price.
    ///
    /// Localized prices are formatted with their own locale active; the
    /// formatter's previous locale is restored before returning.
    pub fn price_text(&mut self, price: &PriceDisplay) -> String {
        match price {
            PriceDisplay::Free => self.style.free_label.clone(),
            PriceDisplay::Localized { amount, locale } => {
                LocaleScope::enter(&mut self.formatter, locale).format(amount)
            }
        }
    }
}
