//! Main application entry point

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use eframe::egui::{self, Context, ScrollArea, Window};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bk_core::events::events::{FilterApplied, PageLoaded};
use bk_core::{handler_from_fn, EventBus, Session, SharedSession, ThemeMode};
use bk_data::AppConfig;
use bk_ui::{
    apply_theme, detail_window, header_bar, list_ui, load_more_button, panel_ids, HeaderAction,
    Overlays, SearchForm, SettingsForm,
};
use bk_views::{BookDetail, ElementId, ElementTree};

/// Main application state
struct CatalogApp {
    /// The list state machine and the element tree it renders into
    session: SharedSession<ElementTree>,

    overlays: Overlays,
    search_form: SearchForm,
    settings_form: SettingsForm,

    /// Theme currently applied
    theme: ThemeMode,

    /// Set after a search so the list starts from the top
    scroll_to_top: bool,
}

impl CatalogApp {
    fn new(cc: &eframe::CreationContext<'_>, session: SharedSession<ElementTree>, theme: ThemeMode) -> Self {
        apply_theme(&cc.egui_ctx, theme);

        let search_form = SearchForm::new(session.lock().catalog());

        Self {
            session,
            overlays: Overlays::default(),
            search_form,
            settings_form: SettingsForm::new(theme),
            theme,
            scroll_to_top: false,
        }
    }

    fn submit_search(&mut self) {
        let query = self.search_form.query();
        self.session.lock().submit_filter(query);
        self.overlays.search.close();
        self.scroll_to_top = true;
    }

    fn select(&mut self, element: ElementId) {
        let session = self.session.lock();
        if let Some(record) = session.select(element) {
            let catalog = session.catalog();
            let detail = BookDetail::from_record(record, catalog.authors(), catalog.genres());
            self.overlays.show_detail(detail);
        }
    }

    fn search_window(&mut self, ctx: &Context) {
        if !self.overlays.search.is_open() {
            return;
        }

        let form = &mut self.search_form;
        let mut submitted = false;
        Window::new("Search")
            .id(egui::Id::new(panel_ids::SEARCH))
            .open(self.overlays.search.flag())
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                submitted = form.ui(ui);
            });

        if submitted {
            self.submit_search();
        }
    }

    fn settings_window(&mut self, ctx: &Context) {
        if !self.overlays.settings.is_open() {
            return;
        }

        let form = &mut self.settings_form;
        let mut saved = None;
        Window::new("Settings")
            .id(egui::Id::new(panel_ids::SETTINGS))
            .open(self.overlays.settings.flag())
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                saved = form.ui(ui);
            });

        if let Some(theme) = saved {
            if theme != self.theme {
                info!(theme = theme.label(), "Switching theme");
                apply_theme(ctx, theme);
                self.theme = theme;
            }
            self.overlays.settings.close();
        }
    }
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        match header_bar(ctx, "Book Catalog") {
            Some(HeaderAction::OpenSearch) => self.overlays.search.open(),
            Some(HeaderAction::OpenSettings) => {
                self.settings_form = SettingsForm::new(self.theme);
                self.overlays.settings.open();
            }
            None => {}
        }

        self.search_window(ctx);
        self.settings_window(ctx);
        detail_window(ctx, &mut self.overlays);

        let mut clicked = None;
        let mut load_more = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            let session = self.session.lock();
            let status = session.status();

            if status.show_no_results {
                ui.label("No results found. Your filters might be too narrow.");
            }

            let mut scroll = ScrollArea::vertical()
                .id_source(panel_ids::LIST)
                .auto_shrink([false, false]);
            if self.scroll_to_top {
                scroll = scroll.vertical_scroll_offset(0.0);
            }

            scroll.show(ui, |ui| {
                clicked = list_ui(ui, session.surface());
                ui.add_space(8.0);
                load_more = load_more_button(ui, &status);
            });
        });
        self.scroll_to_top = false;

        if load_more {
            self.session.lock().load_more();
        }
        if let Some(element) = clicked {
            self.select(element);
        }
    }
}

fn event_bus() -> Arc<EventBus> {
    let bus = Arc::new(EventBus::new());
    bus.subscribe::<FilterApplied>(handler_from_fn(|event| {
        if let Some(applied) = event.as_any().downcast_ref::<FilterApplied>() {
            debug!(matched = applied.matched, "Filter applied");
        }
    }));
    bus.subscribe::<PageLoaded>(handler_from_fn(|event| {
        if let Some(loaded) = event.as_any().downcast_ref::<PageLoaded>() {
            debug!(page = loaded.page, remaining = loaded.remaining, "Page loaded");
        }
    }));
    bus
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Book Catalog");

    let config = AppConfig::discover(std::env::args_os().nth(1).map(PathBuf::from))
        .context("Failed to load configuration")?;
    let catalog = config.load_catalog().context("Failed to load catalog")?;
    let page_size = config.page_size()?;
    let theme = config.theme;

    let session = Session::new(catalog, page_size, ElementTree::new())
        .with_event_bus(event_bus())
        .into_shared();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([480.0, 360.0]),
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Book Catalog",
        options,
        Box::new(move |cc| {
            Box::new(CatalogApp::new(cc, session, theme))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
