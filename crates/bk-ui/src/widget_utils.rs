//! Widget id helpers
//!
//! Every rendered unit needs its own egui id; element ids are unique per
//! render, so they make stable suffixes.

use egui::Id;
use std::fmt::Display;

use bk_views::ElementId;

/// Widget ID builder that ensures unique IDs by combining multiple components
pub struct WidgetId {
    components: Vec<String>,
}

impl WidgetId {
    pub fn new(base: impl Display) -> Self {
        Self {
            components: vec![base.to_string()],
        }
    }

    /// Add a component to the ID
    pub fn with(mut self, component: impl Display) -> Self {
        self.components.push(component.to_string());
        self
    }

    /// Id scoped to a rendered element
    pub fn element(self, element: ElementId) -> Self {
        self.with(element.simple())
    }

    /// Build the final ID string
    pub fn build(&self) -> String {
        self.components.join("_")
    }

    /// Create an egui ID from this widget ID
    pub fn id(&self) -> Id {
        Id::new(self.build())
    }
}
