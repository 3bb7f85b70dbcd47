//! The book list
//!
//! Draws the element tree as it stands and reports which element a click
//! landed on. Mapping that element to a record is left to the session.

use egui::{Frame, Label, RichText, Sense, Ui};

use bk_views::{ElementId, ElementKind, ElementTree};

use crate::widget_utils::WidgetId;

/// Draw every unit in the tree; returns the element that was clicked
///
/// A click on a unit's image, title or author reports that leaf; a click on
/// the unit's padding reports the unit itself.
pub fn list_ui(ui: &mut Ui, tree: &ElementTree) -> Option<ElementId> {
    let mut clicked = None;

    for (unit_id, _) in tree.units() {
        let frame = Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            let mut leaf_clicked = None;
            for &child in tree.children(unit_id) {
                if element_ui(ui, tree, child) {
                    leaf_clicked = Some(child);
                }
            }
            leaf_clicked
        });

        let unit_response = ui.interact(
            frame.response.rect,
            WidgetId::new("unit").element(unit_id).id(),
            Sense::click(),
        );

        if let Some(leaf) = frame.inner {
            clicked = Some(leaf);
        } else if unit_response.clicked() {
            clicked = Some(unit_id);
        }
    }

    clicked
}

fn element_ui(ui: &mut Ui, tree: &ElementTree, id: ElementId) -> bool {
    let Some(element) = tree.get(id) else {
        return false;
    };

    let text = match element.kind {
        ElementKind::Image => RichText::new(format!("🖼 {}", element.text)).small().weak(),
        ElementKind::Title => RichText::new(element.text.as_str()).strong(),
        ElementKind::Author => RichText::new(element.text.as_str()).weak(),
        ElementKind::List | ElementKind::Unit => return false,
    };

    ui.add(Label::new(text).sense(Sense::click())).clicked()
}
