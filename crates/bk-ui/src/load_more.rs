use egui::{Button, Ui};

use bk_core::ListStatus;

/// Label of the load-more button
pub fn show_more_label(remaining: usize) -> String {
    format!("Show more ({})", remaining)
}

/// Draw the load-more button; returns true when clicked while enabled
pub fn load_more_button(ui: &mut Ui, status: &ListStatus) -> bool {
    let button = Button::new(show_more_label(status.remaining));
    ui.add_enabled(!status.load_more_disabled, button).clicked()
}
