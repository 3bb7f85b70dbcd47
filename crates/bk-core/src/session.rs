//! The list state machine
//!
//! A [`Session`] owns the catalog store and the display surface. All state
//! changes go through its three transitions: [`submit_filter`],
//! [`load_more`] and [`select`].
//!
//! [`submit_filter`]: Session::submit_filter
//! [`load_more`]: Session::load_more
//! [`select`]: Session::select

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::events::events::{FilterApplied, PageLoaded, RecordSelected};
use crate::events::EventBus;
use crate::filter::{self, FilterQuery};
use crate::model::{Catalog, Record};
use crate::pager;
use crate::render::{DisplaySurface, Renderer};
use crate::selection::{self, UiTree};
use crate::store::{CatalogStore, PageSize};

/// Session shared with a UI; every transition runs under the one lock
pub type SharedSession<S> = Arc<Mutex<Session<S>>>;

/// Snapshot of the list after a settled transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStatus {
    /// Pages rendered since the last reset
    pub page: usize,

    /// Units on the surface
    pub rendered: usize,

    /// Matched records not yet rendered
    pub remaining: usize,

    /// Whether the load-more control is disabled
    pub load_more_disabled: bool,

    /// Whether the "no results" message is visible
    pub show_no_results: bool,
}

/// Owner of all mutable browsing state
pub struct Session<S> {
    store: CatalogStore,
    renderer: Renderer,
    surface: S,
    query: FilterQuery,
    event_bus: Option<Arc<EventBus>>,
}

impl<S: DisplaySurface> Session<S> {
    /// Start a session showing the first page of the whole catalog
    pub fn new(catalog: Catalog, page_size: PageSize, surface: S) -> Self {
        info!(
            records = catalog.len(),
            authors = catalog.authors().len(),
            genres = catalog.genres().len(),
            page_size = page_size.get(),
            "Starting catalog session"
        );

        let renderer = Renderer::new(catalog.authors().clone());
        let mut session = Self {
            store: CatalogStore::new(catalog, page_size),
            renderer,
            surface,
            query: FilterQuery::all(),
            event_bus: None,
        };
        session.surface.clear_all();
        session.render_first_page();
        session
    }

    /// Publish transition events on `bus`
    pub fn with_event_bus(mut self, bus: Arc<EventBus>) -> Self {
        self.event_bus = Some(bus);
        self
    }

    /// Wrap the session for sharing with a UI thread
    pub fn into_shared(self) -> SharedSession<S> {
        Arc::new(Mutex::new(self))
    }

    /// Replace the result view with the records matching `query`
    ///
    /// Clears the surface and renders the first page of the new view.
    pub fn submit_filter(&mut self, query: FilterQuery) -> ListStatus {
        let matched = filter::matching_indices(&query, self.store.catalog().records());
        info!(
            title = %query.title,
            author = %query.author,
            genre = %query.genre,
            matched = matched.len(),
            "Applying filter"
        );

        if let Err(err) = self.store.reset(matched) {
            warn!(error = %err, "Rejected result view");
            return self.status();
        }
        self.surface.clear_all();
        self.render_first_page();

        if let Some(bus) = &self.event_bus {
            bus.publish(FilterApplied {
                query: query.clone(),
                matched: self.store.view().len(),
            });
        }
        self.query = query;
        self.status()
    }

    /// Append the next page of the current view
    ///
    /// A no-op when nothing remains, whether or not the UI control was
    /// disabled.
    pub fn load_more(&mut self) -> ListStatus {
        if self.store.remaining_count() < 1 {
            debug!(page = self.store.page(), "Nothing left to load");
            return self.status();
        }

        match pager::next_slice(self.store.view(), self.store.page_size()) {
            Ok(range) => {
                let units = self.renderer.render_slice(self.store.matched_slice(range));
                self.surface.append(units);
                self.store.advance_page();
            }
            Err(err) => {
                debug!(error = %err, "Skipping page load");
                return self.status();
            }
        }

        let status = self.status();
        debug!(page = status.page, rendered = status.rendered, remaining = status.remaining, "Loaded page");
        if let Some(bus) = &self.event_bus {
            bus.publish(PageLoaded {
                page: status.page,
                rendered: status.rendered,
                remaining: status.remaining,
            });
        }
        status
    }

    /// Current list status
    pub fn status(&self) -> ListStatus {
        let remaining = self.store.remaining_count();
        ListStatus {
            page: self.store.page(),
            rendered: self.surface.len(),
            remaining,
            load_more_disabled: remaining == 0,
            show_no_results: self.store.view().is_empty(),
        }
    }

    /// The query behind the current view
    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        self.store.catalog()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn render_first_page(&mut self) {
        match pager::first_slice(self.store.view(), self.store.page_size()) {
            Ok(range) => {
                let units = self.renderer.render_slice(self.store.matched_slice(range));
                self.surface.append(units);
            }
            Err(err) => debug!(error = %err, "Nothing to render"),
        }
    }
}

impl<S: DisplaySurface + UiTree> Session<S> {
    /// Resolve a click on the surface to a record for the detail view
    pub fn select(&self, target: S::Node) -> Option<&Record> {
        let record = selection::resolve_or_none(&self.surface, target, self.store.catalog())?;
        if let Some(bus) = &self.event_bus {
            bus.publish(RecordSelected { id: record.id.clone() });
        }
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::handler_from_fn;
    use crate::model::fixtures::five_books;
    use crate::render::ListSurface;

    fn session(page_size: usize) -> Session<ListSurface> {
        Session::new(five_books(), PageSize::new(page_size).unwrap(), ListSurface::new())
    }

    fn rendered_ids(session: &Session<ListSurface>) -> Vec<String> {
        session
            .surface()
            .units()
            .iter()
            .map(|u| u.record_id.to_string())
            .collect()
    }

    #[test]
    fn test_load_more_until_exhausted() {
        let mut session = session(2);
        let status = session.status();
        assert_eq!(rendered_ids(&session), vec!["A", "B"]);
        assert_eq!(status.remaining, 3);
        assert!(!status.load_more_disabled);

        let status = session.load_more();
        assert_eq!(rendered_ids(&session), vec!["A", "B", "C", "D"]);
        assert_eq!(status.remaining, 1);
        assert_eq!(status.page, 2);

        let status = session.load_more();
        assert_eq!(rendered_ids(&session), vec!["A", "B", "C", "D", "E"]);
        assert_eq!(status.remaining, 0);
        assert!(status.load_more_disabled);
    }

    #[test]
    fn test_load_more_when_exhausted_is_noop() {
        let mut session = session(10);
        let before = session.status();
        assert!(before.load_more_disabled);

        let after = session.load_more();
        assert_eq!(before, after);
        assert_eq!(session.store().page(), 1);
        assert_eq!(rendered_ids(&session).len(), 5);
    }

    #[test]
    fn test_genre_filter_resets_page_and_surface() {
        let mut session = session(2);
        session.load_more();

        let status = session.submit_filter(FilterQuery::all().with_genre("g1"));
        assert_eq!(rendered_ids(&session), vec!["B", "D"]);
        assert_eq!(status.page, 1);
        assert_eq!(status.remaining, 0);
        assert!(!status.show_no_results);
        assert_eq!(session.query().genre, "g1");
    }

    #[test]
    fn test_query_matching_nothing() {
        let mut session = session(2);
        let status = session.submit_filter(FilterQuery::all().with_title("no such book"));
        assert!(status.show_no_results);
        assert!(status.load_more_disabled);
        assert_eq!(status.rendered, 0);
        assert!(session.surface().is_empty());
    }

    #[test]
    fn test_repeated_submission_is_idempotent() {
        let mut session = session(2);
        let query = FilterQuery::all().with_title("a");

        let first = session.submit_filter(query.clone());
        let first_matched = session.store().view().clone();
        session.load_more();
        let second = session.submit_filter(query);

        assert_eq!(first, second);
        assert_eq!(&first_matched, session.store().view());
        assert_eq!(second.page, 1);
    }

    #[test]
    fn test_every_matched_record_rendered_once() {
        for page_size in 1..=6 {
            let mut session = session(page_size);
            while !session.status().load_more_disabled {
                session.load_more();
            }
            assert_eq!(rendered_ids(&session), vec!["A", "B", "C", "D", "E"], "page size {}", page_size);
        }
    }

    #[test]
    fn test_remaining_invariant_holds_after_each_step() {
        let mut session = session(2);
        for _ in 0..5 {
            let status = session.status();
            let store = session.store();
            let expected = store.view().len().saturating_sub(store.page() * 2);
            assert_eq!(status.remaining, expected);
            assert_eq!(status.load_more_disabled, expected == 0);
            assert_eq!(status.rendered, store.rendered_count());
            session.load_more();
        }
    }

    #[test]
    fn test_select_returns_record_at_unit_position() {
        let mut session = session(2);
        session.load_more();
        for (position, expected) in ["A", "B", "C", "D"].iter().enumerate() {
            let record = session.select(position).unwrap();
            assert_eq!(record.id.as_str(), *expected);
        }
        assert!(session.select(17).is_none());
    }

    #[test]
    fn test_events_are_published() {
        let bus = Arc::new(EventBus::new());
        let log = Arc::new(Mutex::new(Vec::new()));

        let sink = log.clone();
        bus.subscribe::<FilterApplied>(handler_from_fn(move |event| {
            if let Some(applied) = event.as_any().downcast_ref::<FilterApplied>() {
                sink.lock().push(format!("filter:{}", applied.matched));
            }
        }));
        let sink = log.clone();
        bus.subscribe::<PageLoaded>(handler_from_fn(move |event| {
            if let Some(loaded) = event.as_any().downcast_ref::<PageLoaded>() {
                sink.lock().push(format!("page:{}", loaded.page));
            }
        }));
        let sink = log.clone();
        bus.subscribe::<RecordSelected>(handler_from_fn(move |event| {
            if let Some(selected) = event.as_any().downcast_ref::<RecordSelected>() {
                sink.lock().push(format!("select:{}", selected.id));
            }
        }));

        let mut session = session(2).with_event_bus(bus);
        session.load_more();
        session.select(0);
        session.submit_filter(FilterQuery::all().with_author("a2"));
        session.load_more();

        assert_eq!(*log.lock(), vec!["page:2", "select:A", "filter:2"]);
    }

    #[test]
    fn test_shared_session_serialises_transitions() {
        let shared = session(2).into_shared();
        let worker = {
            let shared = shared.clone();
            std::thread::spawn(move || {
                shared.lock().load_more();
            })
        };
        worker.join().unwrap();
        assert_eq!(shared.lock().status().rendered, 4);
    }
}
