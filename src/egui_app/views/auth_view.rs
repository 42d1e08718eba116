//! Login / signup screen: a centered card with the form fields and a link
//! to switch between the two modes.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{self, colors};
use crate::egui_app::types::AppView;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let p = *colors::palette(state.dark_mode);
    let is_signup = state.current_view == AppView::Signup;
    let available = ui.available_rect_before_wrap();

    ui.vertical_centered(|ui| {
        let card_height = if is_signup { 340.0 } else { 290.0 };
        ui.add_space(((available.height() - card_height).max(0.0)) / 2.0);

        ui.set_max_width(380.0);
        theme::card_frame(&p).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.colored_label(p.accent, egui::RichText::new("📚").size(40.0));
                ui.colored_label(
                    p.text_primary,
                    egui::RichText::new(if is_signup {
                        "Create Account"
                    } else {
                        "Welcome Back"
                    })
                    .size(24.0)
                    .strong(),
                );
                if !is_signup {
                    ui.colored_label(p.text_secondary, "Sign in to your account");
                }
                ui.add_space(16.0);
            });

            let input_width = ui.available_width();

            if is_signup {
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.signup_form.name).hint_text("Name"),
                );
                ui.add_space(8.0);
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.signup_form.email).hint_text("Email"),
                );
                ui.add_space(8.0);
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.signup_form.password)
                        .hint_text("Password")
                        .password(true),
                );
            } else {
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.login_form.email).hint_text("Email"),
                );
                ui.add_space(8.0);
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.login_form.password)
                        .hint_text("Password")
                        .password(true),
                );
            }

            ui.add_space(16.0);

            let submit = egui::Button::new(
                egui::RichText::new(if is_signup { "Sign Up" } else { "Login" })
                    .color(egui::Color32::WHITE),
            )
            .fill(p.accent);
            if ui.add_sized([input_width, 32.0], submit).clicked() {
                if is_signup {
                    state.handle_signup();
                } else {
                    state.handle_login();
                }
            }

            if state.auth_state.loading {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.colored_label(p.text_secondary, "Loading...");
                });
            }

            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                if is_signup {
                    ui.colored_label(p.text_secondary, "Already have an account?");
                    if ui.link(egui::RichText::new("Login").color(p.accent)).clicked() {
                        state.switch_to_login();
                    }
                } else {
                    ui.colored_label(p.text_secondary, "Don't have an account?");
                    if ui
                        .link(egui::RichText::new("Sign up").color(p.accent))
                        .clicked()
                    {
                        state.switch_to_signup();
                    }
                }
            });
        });
    });
}
