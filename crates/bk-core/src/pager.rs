//! Pager
//!
//! Works out which part of the matched sequence a render covers. Page `n`
//! (1-based) spans `[(n - 1) * size, n * size)`, clamped to the matched length.

use std::ops::Range;

use crate::error::CatalogError;
use crate::store::{PageSize, ResultView};

/// Range of matched positions for a 1-based page number
///
/// A page starting at or past the end yields [`CatalogError::OutOfRange`].
pub fn page_range(page: usize, len: usize, page_size: PageSize) -> Result<Range<usize>, CatalogError> {
    let size = page_size.get();
    let start = page.saturating_sub(1).saturating_mul(size);
    if start >= len {
        return Err(CatalogError::OutOfRange { start, len });
    }
    Ok(start..start.saturating_add(size).min(len))
}

/// Slice for the first render of a freshly reset view
pub fn first_slice(view: &ResultView, page_size: PageSize) -> Result<Range<usize>, CatalogError> {
    page_range(1, view.len(), page_size)
}

/// Slice a "load more" would render next
///
/// Covers `[page * size, (page + 1) * size)`; the caller advances the view's
/// page after rendering it.
pub fn next_slice(view: &ResultView, page_size: PageSize) -> Result<Range<usize>, CatalogError> {
    page_range(view.page() + 1, view.len(), page_size)
}

/// Whether any matched record lies beyond the rendered pages
pub fn has_more(view: &ResultView, page_size: PageSize) -> bool {
    next_slice(view, page_size).is_ok()
}
