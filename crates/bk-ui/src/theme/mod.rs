use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

use bk_core::ThemeMode;

/// Apply the day or night theme
///
/// Every colour is derived from the theme's two colour variables: `dark`
/// for text and strokes, `light` for backgrounds.
pub fn apply_theme(ctx: &Context, mode: ThemeMode) {
    let scheme = mode.scheme();
    let mut style = Style::default();
    let mut visuals = match mode {
        ThemeMode::Day => Visuals::light(),
        ThemeMode::Night => Visuals::dark(),
    };

    let text_color = rgb(scheme.dark);
    let bg_color = rgb(scheme.light);
    let widget_bg = mix(scheme.light, scheme.dark, 0.06);
    let hover_color = mix(scheme.light, scheme.dark, 0.12);
    let active_color = mix(scheme.light, scheme.dark, 0.2);
    let border_color = mix(scheme.light, scheme.dark, 0.25);

    visuals.override_text_color = Some(text_color);
    visuals.window_fill = bg_color;
    visuals.panel_fill = bg_color;
    visuals.extreme_bg_color = bg_color;
    visuals.faint_bg_color = widget_bg;

    visuals.widgets.noninteractive.bg_fill = bg_color;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, border_color);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.noninteractive.rounding = Rounding::same(6.0);

    visuals.widgets.inactive.bg_fill = widget_bg;
    visuals.widgets.inactive.weak_bg_fill = widget_bg;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.inactive.rounding = Rounding::same(6.0);

    visuals.widgets.hovered.bg_fill = hover_color;
    visuals.widgets.hovered.weak_bg_fill = hover_color;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.hovered.rounding = Rounding::same(6.0);

    visuals.widgets.active.bg_fill = active_color;
    visuals.widgets.active.weak_bg_fill = active_color;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.active.rounding = Rounding::same(6.0);

    visuals.selection.bg_fill = active_color;
    visuals.selection.stroke = Stroke::new(1.0, text_color);

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    style.visuals = visuals;
    ctx.set_style(style);
}

/// Convert a colour variable to an egui colour
pub fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

/// Blend `from` toward `to` by `t` in `[0, 1]`
pub fn mix(from: [u8; 3], to: [u8; 3], t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgb(
        channel(from[0], to[0]),
        channel(from[1], to[1]),
        channel(from[2], to[2]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_endpoints() {
        let day = ThemeMode::Day.scheme();
        assert_eq!(mix(day.light, day.dark, 0.0), rgb(day.light));
        assert_eq!(mix(day.light, day.dark, 1.0), rgb(day.dark));
        assert_eq!(mix(day.light, day.dark, 7.0), rgb(day.dark));
    }

    #[test]
    fn test_mix_midpoint() {
        assert_eq!(mix([0, 0, 0], [200, 100, 50], 0.5), Color32::from_rgb(100, 50, 25));
    }
}
