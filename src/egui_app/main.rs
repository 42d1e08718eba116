/**
 * egui Native Desktop App - Main Entry Point
 *
 * Boots the eframe window and drives the per-frame loop: poll in-flight
 * network results, expire the notification, apply the theme, render.
 */
use eframe::egui;

use bookshelf::egui_app::{theme, views, AppState};

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Bookshelf",
        options,
        Box::new(|_cc| Ok(Box::new(BookshelfApp::default()))),
    )
}

/// Main application wrapper
struct BookshelfApp {
    state: AppState,
}

impl Default for BookshelfApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for BookshelfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_results();
        self.state.update_notification();

        theme::apply_theme(ctx, self.state.dark_mode);

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
        views::render_notification(ctx, &self.state);

        // keep polling receivers while requests are in flight
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
