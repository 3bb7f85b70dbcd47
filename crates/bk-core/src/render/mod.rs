//! Rendering records onto a display surface
//!
//! The renderer only projects records into [`DisplayUnit`]s. Whether those
//! units are appended or the surface is cleared first is decided by the
//! session, never by diffing.

use std::sync::Arc;

use tracing::warn;

use crate::model::{AuthorTable, Record, RecordId};
use crate::selection::UiTree;

/// One rendered, clickable representation of a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUnit {
    /// Back-reference to the source record
    pub record_id: RecordId,

    /// Book title
    pub title: String,

    /// Author display name
    pub author: String,

    /// Cover image URL
    pub image: String,
}

impl DisplayUnit {
    /// The key used to correlate the unit back to its record
    pub fn correlation_key(&self) -> &RecordId {
        &self.record_id
    }
}

/// Accumulating target for rendered units
///
/// Units are append-only between two calls to [`clear_all`](Self::clear_all).
pub trait DisplaySurface {
    /// Append units after everything already on the surface, in order
    fn append(&mut self, units: Vec<DisplayUnit>);

    /// Remove every unit
    fn clear_all(&mut self);

    /// Number of units currently on the surface
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Projects records into display units
#[derive(Debug, Clone)]
pub struct Renderer {
    authors: Arc<AuthorTable>,
}

impl Renderer {
    pub fn new(authors: Arc<AuthorTable>) -> Self {
        Self { authors }
    }

    /// Build the unit for a single record
    pub fn project(&self, record: &Record) -> DisplayUnit {
        let author = match self.authors.name(&record.author_id) {
            Some(name) => name.to_string(),
            None => {
                warn!(record = %record.id, author = %record.author_id, "Unknown author id");
                record.author_id.clone()
            }
        };

        DisplayUnit {
            record_id: record.id.clone(),
            title: record.title.clone(),
            author,
            image: record.image.clone(),
        }
    }

    /// Build units for a slice of records, preserving input order
    pub fn render_slice<'a>(&self, records: impl IntoIterator<Item = &'a Record>) -> Vec<DisplayUnit> {
        records.into_iter().map(|record| self.project(record)).collect()
    }
}

/// Flat in-memory surface
///
/// Interaction targets are unit positions; there is no nesting, so a target
/// either is a unit or hits nothing.
#[derive(Debug, Clone, Default)]
pub struct ListSurface {
    units: Vec<DisplayUnit>,
}

impl ListSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn units(&self) -> &[DisplayUnit] {
        &self.units
    }
}

impl DisplaySurface for ListSurface {
    fn append(&mut self, units: Vec<DisplayUnit>) {
        self.units.extend(units);
    }

    fn clear_all(&mut self) {
        self.units.clear();
    }

    fn len(&self) -> usize {
        self.units.len()
    }
}

impl UiTree for ListSurface {
    type Node = usize;

    fn parent(&self, _node: usize) -> Option<usize> {
        None
    }

    fn correlation_key(&self, node: usize) -> Option<&RecordId> {
        self.units.get(node).map(DisplayUnit::correlation_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{five_books, record};

    #[test]
    fn test_project_uses_author_display_name() {
        let catalog = five_books();
        let renderer = Renderer::new(catalog.authors().clone());
        let unit = renderer.project(&catalog.records()[1]);
        assert_eq!(unit.record_id.as_str(), "B");
        assert_eq!(unit.author, "Alan Turing");
        assert_eq!(unit.title, "Beta Testing");
    }

    #[test]
    fn test_unknown_author_falls_back_to_id() {
        let renderer = Renderer::new(Arc::new(AuthorTable::new()));
        let unit = renderer.project(&record("X", "Orphan", "nobody", &[]));
        assert_eq!(unit.author, "nobody");
    }

    #[test]
    fn test_surface_appends_in_order_and_clears() {
        let catalog = five_books();
        let renderer = Renderer::new(catalog.authors().clone());
        let mut surface = ListSurface::new();

        surface.append(renderer.render_slice(&catalog.records()[..2]));
        surface.append(renderer.render_slice(&catalog.records()[2..3]));
        let ids: Vec<_> = surface.units().iter().map(|u| u.record_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);

        surface.clear_all();
        assert!(surface.is_empty());
    }
}
