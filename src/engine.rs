//! The binding engine that owns the displayed catalog snapshot.

use crate::catalog::CatalogViewModel;
use crate::host::{CatalogRows, ListHost};
use crate::price::PriceFormatter;
use crate::renderer::RowRenderer;

/// Result of [`BindingEngine::bind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
    /// The catalog equals the displayed one; nothing was rendered.
    Unchanged,
    /// The catalog was replaced and the host reloaded every visible row.
    Refreshed,
}

/// Binds catalog snapshots to a [`ListHost`].
///
/// The engine holds exactly one snapshot at a time. Binding a structurally
/// equal catalog is a no-op; binding a different one replaces the snapshot
/// wholesale and asks the host for a full reload. There is no per-row diffing.
///
/// All calls are synchronous and must come from the thread that owns the host.
///
/// # Type Parameters
///
/// * `P` - The opaque product handle carried by each row
/// * `F` - The price formatter implementation (implements [`PriceFormatter`])
/// * `H` - The list host implementation (implements [`ListHost`])
pub struct BindingEngine<P, F, H> {
    catalog: CatalogViewModel<P>,
    renderer: RowRenderer<P, F>,
    host: H,
}

impl<P, F, H> BindingEngine<P, F, H>
where
    P: Clone + PartialEq + Send + Sync + 'static,
    F: PriceFormatter,
    H: ListHost,
{
    /// Create an engine displaying the empty catalog.
    ///
    /// No reload is issued until the first non-empty catalog is bound.
    pub fn new(renderer: RowRenderer<P, F>, host: H) -> Self {
        Self {
            catalog: CatalogViewModel::empty(),
            renderer,
            host,
        }
    }

    /// Present a new catalog snapshot.
    pub fn bind(&mut self, catalog: CatalogViewModel<P>) -> BindOutcome {
        if self.catalog == catalog {
            tracing::trace!("catalog unchanged, skipping reload");
            return BindOutcome::Unchanged;
        }

        tracing::debug!(
            items = catalog.items().len(),
            footer = catalog.footer().is_some(),
            "binding new catalog"
        );
        self.catalog = catalog;
        self.reload();
        BindOutcome::Refreshed
    }

    /// Reload every visible row from the current snapshot.
    ///
    /// Use this when something outside the catalog changed, such as the
    /// host's layout direction.
    pub fn refresh(&mut self) {
        tracing::debug!(rows = self.catalog.row_count(), "refreshing rows");
        self.reload();
    }

    fn reload(&mut self) {
        let direction = self.host.layout_direction();
        let mut rows = CatalogRows {
            catalog: &self.catalog,
            renderer: &mut self.renderer,
            direction,
        };
        self.host.reload(&mut rows);
    }

    pub fn catalog(&self) -> &CatalogViewModel<P> {
        &self.catalog
    }

    /// Row count reported to the host.
    pub fn row_count(&self) -> usize {
        self.catalog.row_count()
    }

    pub fn renderer(&self) -> &RowRenderer<P, F> {
        &self.renderer
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
