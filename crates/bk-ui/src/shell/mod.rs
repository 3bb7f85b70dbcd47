use egui::{Context, TopBottomPanel};

use crate::panel_ids;

/// Buttons in the header bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    OpenSearch,
    OpenSettings,
}

/// Render the header bar
pub fn header_bar(ctx: &Context, title: &str) -> Option<HeaderAction> {
    let mut action = None;

    TopBottomPanel::top(panel_ids::HEADER).show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⚙ Settings").clicked() {
                    action = Some(HeaderAction::OpenSettings);
                }
                if ui.button("🔍 Search").clicked() {
                    action = Some(HeaderAction::OpenSearch);
                }
            });
        });
    });

    action
}
