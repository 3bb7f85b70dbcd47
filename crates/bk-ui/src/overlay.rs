//! Overlay open/close state and the detail window

use egui::{Context, RichText, Window};

use bk_views::BookDetail;

use crate::panel_ids;

/// Open/closed flag for one overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlay {
    open: bool,
}

impl Overlay {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Mutable flag for `egui::Window::open`
    pub fn flag(&mut self) -> &mut bool {
        &mut self.open
    }
}

/// All overlays of the browser
#[derive(Debug, Clone, Default)]
pub struct Overlays {
    pub search: Overlay,
    pub settings: Overlay,

    /// The detail overlay is open while it holds a book
    pub detail: Option<BookDetail>,
}

impl Overlays {
    pub fn show_detail(&mut self, detail: BookDetail) {
        self.detail = Some(detail);
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }
}

/// Draw the detail overlay if a book is selected
pub fn detail_window(ctx: &Context, overlays: &mut Overlays) {
    let Some(detail) = overlays.detail.as_ref() else {
        return;
    };

    let mut open = true;
    let mut close_clicked = false;
    Window::new(detail.title.as_str())
        .id(egui::Id::new(panel_ids::DETAIL))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(RichText::new(detail.title.as_str()).heading());
            ui.label(RichText::new(detail.subtitle.as_str()).weak());
            if !detail.genres.is_empty() {
                ui.label(RichText::new(detail.genres.join(" · ")).small());
            }
            ui.separator();
            ui.label(detail.description.as_str());
            ui.add_space(6.0);
            ui.hyperlink_to("Cover image", detail.image.as_str());
            ui.add_space(6.0);
            if ui.button("Close").clicked() {
                close_clicked = true;
            }
        });

    if !open || close_clicked {
        overlays.close_detail();
    }
}
