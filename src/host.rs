//! The list host capability and the engine's row data source.

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

use crate::catalog::{CatalogViewModel, Row};
use crate::mapper::RowKind;
use crate::price::PriceFormatter;
use crate::renderer::RowRenderer;
use crate::slot::{LayoutDirection, RowSlot};

/// A scrollable list surface that displays the table's rows.
///
/// Implement this trait to integrate purchase-table with your list widget
/// (UI toolkit table view, web DOM list, terminal list, etc.). The host owns
/// scrolling, slot pooling and layout; the engine only writes row content into
/// the slots the host lends it.
///
/// # Example
///
/// ```rust
/// use purchase_table::{LayoutDirection, ListHost, RowSlot, RowSource};
///
/// struct EagerHost {
///     slots: Vec<RowSlot>,
/// }
///
/// impl ListHost for EagerHost {
///     fn layout_direction(&self) -> LayoutDirection {
///         LayoutDirection::LeftToRight
///     }
///
///     fn reload(&mut self, rows: &mut dyn RowSource) {
///         self.slots.resize_with(rows.row_count(), RowSlot::new);
///         for (index, slot) in self.slots.iter_mut().enumerate() {
///             rows.materialize(index, slot);
///         }
///     }
/// }
/// ```
pub trait ListHost {
    /// The presentation direction currently in effect.
    ///
    /// Queried by the engine once per reload, before [`reload`](Self::reload)
    /// is called; every row of that reload is laid out in this direction.
    fn layout_direction(&self) -> LayoutDirection;

    /// Discard displayed content and re-materialize every visible row.
    ///
    /// Called after the engine applies a new catalog. `rows` already reflects
    /// the new catalog when this is called.
    fn reload(&mut self, rows: &mut dyn RowSource);
}

/// The engine side of a host reload.
pub trait RowSource {
    /// Number of rows in the current catalog, footer included.
    fn row_count(&self) -> usize;

    /// # Panics
    ///
    /// Panics if `index >= self.row_count()`.
    fn kind(&self, index: usize) -> RowKind;

    /// Direction the rows of this reload are laid out in, as reported by
    /// [`ListHost::layout_direction`].
    fn direction(&self) -> LayoutDirection;

    /// Write row `index` into `slot`, building static chrome if the slot does
    /// not already hold chrome of the right kind.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.row_count()`.
    fn materialize(&mut self, index: usize, slot: &mut RowSlot);
}

pub(crate) struct CatalogRows<'a, P, F> {
    pub(crate) catalog: &'a CatalogViewModel<P>,
    pub(crate) renderer: &'a mut RowRenderer<P, F>,
    pub(crate) direction: LayoutDirection,
}

impl<P, F> RowSource for CatalogRows<'_, P, F>
where
    P: Clone + Send + Sync + 'static,
    F: PriceFormatter,
{
    fn row_count(&self) -> usize {
        self.catalog.row_count()
    }

    fn kind(&self, index: usize) -> RowKind {
        self.catalog.kind(index)
    }

    fn direction(&self) -> LayoutDirection {
        self.direction
    }

    fn materialize(&mut self, index: usize, slot: &mut RowSlot) {
        match self.catalog.row(index) {
            Row::Item(model) => self.renderer.render_item(model, slot, self.direction),
            Row::Footer(text) => self.renderer.render_footer(text, slot, self.direction),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test host that keeps materialized slots for assertions.
///
/// Only available with the `testing` feature.
///
/// Every reload materializes all visible rows, reusing slots by position and
/// parking slots that scroll out of the viewport in a pool for later reuse.
/// Clones share the same state, so keep one clone and hand the other to the
/// engine.
///
/// # Example
///
/// ```rust
/// use purchase_table::{CatalogViewModel, PriceDisplay, PurchaseTable, RowModel, TestHost};
///
/// let host = TestHost::new();
/// let mut table = PurchaseTable::new(|_product: u32| {}).build(host.clone());
///
/// table.bind(CatalogViewModel::new(
///     vec![RowModel::new(1, "100 coins", "Starter pack", PriceDisplay::Free, true)],
///     Some("Taxes included".to_string()),
/// ));
///
/// assert_eq!(host.reload_count(), 1);
/// host.with_slots(|slots| {
///     assert_eq!(slots[0].item().unwrap().action().title(), "Free");
///     assert_eq!(slots[1].footer().unwrap().label().text(), "Taxes included");
/// });
/// ```
pub struct TestHost {
    state: Arc<Mutex<TestHostState>>,
}

#[cfg(any(test, feature = "testing"))]
#[derive(Default)]
struct TestHostState {
    slots: Vec<RowSlot>,
    pool: Vec<RowSlot>,
    direction: LayoutDirection,
    viewport: Option<usize>,
    kinds: Vec<RowKind>,
    reloads: usize,
    materialized: usize,
}

#[cfg(any(test, feature = "testing"))]
impl Clone for TestHost {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl ListHost for TestHost {
    fn layout_direction(&self) -> LayoutDirection {
        self.state.lock().direction
    }

    fn reload(&mut self, rows: &mut dyn RowSource) {
        let mut state = self.state.lock();
        state.reloads += 1;

        let row_count = rows.row_count();
        let visible = state.viewport.map_or(row_count, |limit| limit.min(row_count));
        while state.slots.len() > visible {
            if let Some(slot) = state.slots.pop() {
                state.pool.push(slot);
            }
        }
        while state.slots.len() < visible {
            let slot = state.pool.pop().unwrap_or_default();
            state.slots.push(slot);
        }

        state.kinds = (0..visible).map(|index| rows.kind(index)).collect();
        for (index, slot) in state.slots.iter_mut().enumerate() {
            rows.materialize(index, slot);
        }
        state.materialized += visible;
    }
}

#[cfg(any(test, feature = "testing"))]
impl TestHost {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(TestHostState::default())),
        }
    }

    /// Only the first `rows` rows are materialized on reload.
    pub fn with_viewport(self, rows: usize) -> Self {
        self.state.lock().viewport = Some(rows);
        self
    }

    /// Change the direction reported to the engine. Takes effect on the next
    /// reload.
    pub fn set_layout_direction(&self, direction: LayoutDirection) {
        self.state.lock().direction = direction;
    }

    /// Number of reloads the engine has requested.
    pub fn reload_count(&self) -> usize {
        self.state.lock().reloads
    }

    /// Total rows materialized across all reloads.
    pub fn materialized_rows(&self) -> usize {
        self.state.lock().materialized
    }

    /// Kinds of the on-screen rows as reported by the engine at the last
    /// reload.
    pub fn visible_kinds(&self) -> Vec<RowKind> {
        self.state.lock().kinds.clone()
    }

    /// Number of slots currently on screen.
    pub fn visible_rows(&self) -> usize {
        self.state.lock().slots.len()
    }

    /// Access the on-screen slots, in row order.
    pub fn with_slots<R>(&self, f: impl FnOnce(&[RowSlot]) -> R) -> R {
        let state = self.state.lock();
        f(&state.slots)
    }

    /// Mutable access to the on-screen slots, e.g. to start a busy indicator
    /// the way a purchase flow would.
    pub fn with_slots_mut<R>(&self, f: impl FnOnce(&mut [RowSlot]) -> R) -> R {
        let mut state = self.state.lock();
        f(&mut state.slots)
    }

    /// Deliver a tap to the action control of the on-screen row `index`.
    ///
    /// The handler runs after the slot lock is released, so it may use this
    /// host (e.g. [`with_slots_mut`](Self::with_slots_mut) to start the busy
    /// indicator). Returns `false` if the row is not an item row or its
    /// control is disabled.
    pub fn tap(&self, index: usize) -> bool {
        let handler = {
            let state = self.state.lock();
            state
                .slots
                .get(index)
                .and_then(RowSlot::item)
                .and_then(|chrome| chrome.action().enabled_handler())
        };
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}
