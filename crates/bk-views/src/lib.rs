//! View layer for the catalog browser
//!
//! [`ElementTree`] is the display surface units are rendered into: a small
//! tree of elements where each unit boundary carries its record id, so a click
//! on any nested element can be traced back to the record.

mod detail;
mod element_tree;

pub use detail::BookDetail;
pub use element_tree::{Element, ElementId, ElementKind, ElementTree};
