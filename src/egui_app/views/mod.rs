//! Views
//!
//! One module per screen, plus the top bar, the notification toast and the
//! small shared widgets (star rows, genre tags). Each view receives the
//! whole [`AppState`] and drives transitions through its methods.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{self, colors, Palette};
use crate::egui_app::types::{AppView, NotificationKind};

pub mod add_book_view;
pub mod auth_view;
pub mod book_details_view;
pub mod home_view;
pub mod profile_view;

/// Top navigation bar. Hidden on the auth screens.
pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    if matches!(state.current_view, AppView::Login | AppView::Signup) {
        return;
    }

    let p = colors::palette(state.dark_mode);
    let user_name = state.auth_state.user.as_ref().map(|u| u.name.clone());

    egui::TopBottomPanel::top("top_panel")
        .frame(theme::top_bar_frame(p))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    p.accent,
                    egui::RichText::new("📚 BookReview").size(20.0).strong(),
                );
                ui.add_space(16.0);

                if ui
                    .selectable_label(state.current_view == AppView::Home, "Home")
                    .clicked()
                {
                    state.enter_home();
                }
                if ui
                    .selectable_label(state.current_view == AppView::AddBook, "➕ Add Book")
                    .clicked()
                {
                    state.enter_add_book();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Logout").clicked() {
                        state.logout();
                        return;
                    }
                    if ui
                        .button(if state.dark_mode { "☀" } else { "🌙" })
                        .clicked()
                    {
                        state.toggle_dark_mode();
                    }
                    if let Some(name) = user_name {
                        if ui
                            .selectable_label(
                                state.current_view == AppView::Profile,
                                format!("👤 {}", name),
                            )
                            .clicked()
                        {
                            state.enter_profile();
                        }
                    }
                });
            });
        });
}

/// Central panel dispatching on the current view.
pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let p = colors::palette(state.dark_mode);
    let frame = egui::Frame::new()
        .fill(p.window_bg)
        .inner_margin(egui::Margin::same(16));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_view {
            AppView::Login | AppView::Signup => auth_view::render(ui, state),
            AppView::Home => home_view::render(ui, state),
            AppView::BookDetails => book_details_view::render(ui, state),
            AppView::AddBook => add_book_view::render(ui, state),
            AppView::Profile => profile_view::render(ui, state),
        });
}

/// Transient notification toast, anchored to the top-right corner.
pub fn render_notification(ctx: &egui::Context, state: &AppState) {
    let Some(notification) = &state.notification else {
        return;
    };
    let p = colors::palette(state.dark_mode);
    let fill = match notification.kind {
        NotificationKind::Success => p.success,
        NotificationKind::Error => p.danger,
    };

    egui::Area::new(egui::Id::new("notification_toast"))
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 56.0])
        .show(ctx, |ui| {
            theme::notification_frame(fill).show(ui, |ui| {
                ui.colored_label(egui::Color32::WHITE, &notification.message);
            });
        });
}

/// A read-only row of five stars for an (average) rating.
pub fn star_row(ui: &mut egui::Ui, rating: f32, p: &Palette) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 1.0;
        for star in 1..=5 {
            let filled = (star as f32) <= rating;
            let color = if filled { p.star_filled } else { p.star_empty };
            ui.colored_label(color, "★");
        }
    });
}

/// Five clickable stars for picking a rating in the review form.
pub fn star_picker(ui: &mut egui::Ui, rating: &mut i32, p: &Palette) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        for star in 1..=5 {
            let filled = star <= *rating;
            let color = if filled { p.star_filled } else { p.star_empty };
            if ui
                .add(egui::Button::new(
                    egui::RichText::new("★").size(22.0).color(color),
                ))
                .clicked()
            {
                *rating = star;
            }
        }
    });
}

/// Small colored genre tag.
pub fn genre_tag(ui: &mut egui::Ui, genre: &str, p: &Palette) {
    egui::Frame::new()
        .fill(p.tag_bg)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.colored_label(p.accent, egui::RichText::new(genre).size(11.0));
        });
}

/// Truncate a description for the card preview, respecting char boundaries.
pub fn preview_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}…", truncated.trim_end())
    }
}
