//! User interface components for the catalog browser
//!
//! This crate provides the egui widgets: the book list, the search and
//! settings forms, the overlays and the theme.

pub mod list_panel;
pub mod load_more;
pub mod overlay;
pub mod search;
pub mod settings;
pub mod shell;
pub mod theme;
pub mod widget_utils;

/// Re-export commonly used types
pub use list_panel::list_ui;
pub use load_more::{load_more_button, show_more_label};
pub use overlay::{Overlay, Overlays, detail_window};
pub use search::{DropdownOption, SearchForm, author_options, genre_options};
pub use settings::SettingsForm;
pub use shell::{HeaderAction, header_bar};
pub use theme::apply_theme;
pub use widget_utils::WidgetId;

// Panel IDs
pub mod panel_ids {
    pub const HEADER: &str = "header_panel";
    pub const LIST: &str = "book_list";
    pub const SEARCH: &str = "search_overlay";
    pub const SETTINGS: &str = "settings_overlay";
    pub const DETAIL: &str = "detail_overlay";
}
