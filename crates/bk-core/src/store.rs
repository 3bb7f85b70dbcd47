//! Catalog store
//!
//! Owns the universe and the active [`ResultView`]. The view is replaced
//! wholesale on every filter submission and only ever mutated in place by
//! advancing its page cursor.

use std::num::NonZeroUsize;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::model::{Catalog, Record};

/// Number of records rendered per page
///
/// Shared by the pager and the remaining-count computation so the two can
/// never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub const DEFAULT: usize = 36;

    pub fn new(size: usize) -> Option<Self> {
        NonZeroUsize::new(size).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::new(Self::DEFAULT).unwrap_or(Self(NonZeroUsize::MIN))
    }
}

impl TryFrom<usize> for PageSize {
    type Error = String;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size).ok_or_else(|| "page size must be at least 1".to_string())
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

/// The matched subset of the universe plus the pagination cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    /// Positions in the universe, ascending
    matched: Vec<usize>,

    /// Pages rendered since the last reset, always >= 1
    page: usize,
}

impl ResultView {
    /// Callers guarantee `matched` is ascending and within the universe
    pub(crate) fn new(matched: Vec<usize>) -> Self {
        Self { matched, page: 1 }
    }

    /// Build a view over a universe of `len` records
    ///
    /// Fails unless every index is in bounds and strictly ascending.
    pub fn checked(matched: Vec<usize>, len: usize) -> Result<Self, CatalogError> {
        let mut previous = None;
        for &index in &matched {
            if index >= len || previous.is_some_and(|prev| index <= prev) {
                return Err(CatalogError::InvalidMatch { index, len });
            }
            previous = Some(index);
        }
        Ok(Self::new(matched))
    }

    pub fn matched(&self) -> &[usize] {
        &self.matched
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn len(&self) -> usize {
        self.matched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }
}

/// Universe plus active result view
#[derive(Debug, Clone)]
pub struct CatalogStore {
    catalog: Catalog,
    view: ResultView,
    page_size: PageSize,
}

impl CatalogStore {
    /// Create a store whose view matches the whole universe
    pub fn new(catalog: Catalog, page_size: PageSize) -> Self {
        let view = ResultView::new((0..catalog.len()).collect());
        Self {
            catalog,
            view,
            page_size,
        }
    }

    /// Replace the active view, resetting the page cursor to 1
    ///
    /// Every previously rendered unit is stale after this call; the caller
    /// must clear the display surface before rendering again. A rejected
    /// `matched` leaves the current view in place.
    pub fn reset(&mut self, matched: Vec<usize>) -> Result<(), CatalogError> {
        self.view = ResultView::checked(matched, self.catalog.len())?;
        Ok(())
    }

    /// Move the page cursor forward by one page
    ///
    /// Callers check [`remaining_count`](Self::remaining_count) first.
    pub fn advance_page(&mut self) {
        self.view.page += 1;
    }

    /// Matched records not yet covered by the rendered pages
    pub fn remaining_count(&self) -> usize {
        self.view
            .len()
            .saturating_sub(self.view.page.saturating_mul(self.page_size.get()))
    }

    /// Matched records covered by the rendered pages
    pub fn rendered_count(&self) -> usize {
        self.view
            .len()
            .min(self.view.page.saturating_mul(self.page_size.get()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> &ResultView {
        &self.view
    }

    pub fn page(&self) -> usize {
        self.view.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Matched records in order
    pub fn matched(&self) -> impl Iterator<Item = &Record> + '_ {
        let records = self.catalog.records();
        self.view.matched.iter().map(move |&idx| &records[idx])
    }

    /// Matched records at positions `range` of the matched sequence
    ///
    /// The range is clamped to the matched length.
    pub fn matched_slice(&self, range: Range<usize>) -> Vec<&Record> {
        let len = self.view.len();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        let records = self.catalog.records();
        self.view.matched[start..end].iter().map(|&idx| &records[idx]).collect()
    }

    /// Look up a record in the universe, regardless of the active filter
    pub fn find(&self, id: &str) -> Option<&Record> {
        self.catalog.find(id)
    }
}
