//! Mapping between the host's linear row index space and catalog content.
//!
//! The row space is the item list followed by an optional footer row:
//!
//! ```text
//! index:  0 .. n-1     n
//! kind:   Item(i)      Footer   (only when a footer is present)
//! ```

use crate::error::RowIndexError;

/// What a row index addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// The item at this position of the catalog's item list.
    Item(usize),
    /// The trailing footer row.
    Footer,
}

/// Total number of rows exposed to the host.
pub fn row_count(item_count: usize, has_footer: bool) -> usize {
    item_count + usize::from(has_footer)
}

/// Resolve a row index to its [`RowKind`].
///
/// # Panics
///
/// Panics if `index` is outside `0..row_count(item_count, has_footer)`. That
/// means the host and the engine disagree about the row count, and continuing
/// would put the wrong content on screen.
pub fn resolve(index: usize, item_count: usize, has_footer: bool) -> RowKind {
    match try_resolve(index, item_count, has_footer) {
        Ok(kind) => kind,
        Err(err) => panic!("{err}"),
    }
}

/// Checked variant of [`resolve`].
pub fn try_resolve(
    index: usize,
    item_count: usize,
    has_footer: bool,
) -> Result<RowKind, RowIndexError> {
    if index < item_count {
        Ok(RowKind::Item(index))
    } else if has_footer && index == item_count {
        Ok(RowKind::Footer)
    } else {
        Err(RowIndexError::OutOfRange {
            index,
            row_count: row_count(item_count, has_footer),
        })
    }
}
