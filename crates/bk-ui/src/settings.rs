//! Settings overlay form

use egui::Ui;
use tracing::debug;

use bk_core::ThemeMode;

/// Pending settings; applied only when saved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsForm {
    pub theme: ThemeMode,
}

impl SettingsForm {
    pub fn new(theme: ThemeMode) -> Self {
        Self { theme }
    }

    /// Draw the form; returns the chosen theme when saved
    pub fn ui(&mut self, ui: &mut Ui) -> Option<ThemeMode> {
        ui.label("Theme");
        ui.horizontal(|ui| {
            for mode in ThemeMode::all() {
                ui.radio_value(&mut self.theme, mode, mode.label());
            }
        });

        ui.add_space(8.0);
        let saved = ui.button("Save").clicked().then_some(self.theme);
        if let Some(theme) = saved {
            debug!(theme = theme.label(), "Settings saved");
        }
        saved
    }
}
