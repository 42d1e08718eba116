//! Theme Styling Functions
//!
//! Applies the active palette to the egui context and provides the frame
//! builders the views share.

use eframe::egui::{self, CornerRadius, Stroke};

use super::colors::{palette, Palette};

/// Apply the active theme to the egui context. Called once per frame so a
/// dark-mode toggle takes effect immediately.
pub fn apply_theme(ctx: &egui::Context, dark_mode: bool) {
    let p = palette(dark_mode);

    let mut visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    visuals.panel_fill = p.window_bg;
    visuals.window_fill = p.card_bg;
    visuals.window_stroke = Stroke::new(1.0, p.card_stroke);

    visuals.widgets.noninteractive.bg_fill = p.card_bg;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, p.text_primary);
    visuals.widgets.inactive.bg_fill = p.input_bg;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, p.text_primary);
    visuals.widgets.hovered.bg_fill = p.accent_hover;
    visuals.widgets.active.bg_fill = p.accent;

    visuals.selection.bg_fill = p.accent;
    visuals.extreme_bg_color = p.input_bg;

    ctx.set_visuals(visuals);
}

/// Frame for content cards (book cards, forms, review entries).
pub fn card_frame(p: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(p.card_bg)
        .stroke(Stroke::new(1.0, p.card_stroke))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(16))
}

/// Frame for the top navigation bar.
pub fn top_bar_frame(p: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(p.top_bar_bg)
        .stroke(Stroke::new(1.0, p.card_stroke))
        .inner_margin(egui::Margin::symmetric(16, 10))
}

/// Frame for the transient notification toast.
pub fn notification_frame(fill: egui::Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(14, 10))
}
