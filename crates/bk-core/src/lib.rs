//! Core functionality for the catalog browser
//!
//! This crate provides the data model and the list state machine: filtering
//! the catalog, paging through the matched records, rendering them onto a
//! display surface and resolving clicks back to records.

pub mod error;
pub mod events;
pub mod filter;
pub mod model;
pub mod pager;
pub mod render;
pub mod selection;
pub mod session;
pub mod settings;
pub mod store;

// Re-export commonly used types
pub use error::CatalogError;
pub use events::{EventBus, Event, EventHandler, handler_from_fn};
pub use filter::{FilterQuery, ANY};
pub use model::{Catalog, LookupTable, AuthorTable, GenreTable, Record, RecordId};
pub use render::{DisplaySurface, DisplayUnit, ListSurface, Renderer};
pub use selection::{UiTree, nearest_tagged_ancestor};
pub use session::{ListStatus, Session, SharedSession};
pub use settings::{ColorScheme, ThemeMode};
pub use store::{CatalogStore, PageSize, ResultView};
