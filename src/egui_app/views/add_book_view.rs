//! Add-book screen: a centered form over the fixed genre list.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{self, colors};
use crate::shared::catalog::GENRES;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let p = *colors::palette(state.dark_mode);

    let mut submit = false;
    let mut cancel = false;

    ui.vertical_centered(|ui| {
        ui.set_max_width(600.0);

        theme::card_frame(&p).show(ui, |ui| {
            ui.colored_label(
                p.text_primary,
                egui::RichText::new("Add a New Book").size(22.0).strong(),
            );
            ui.add_space(12.0);

            let width = ui.available_width();

            ui.colored_label(p.text_secondary, "Title");
            ui.add_sized(
                [width, 28.0],
                egui::TextEdit::singleline(&mut state.library.book_form.title),
            );
            ui.add_space(8.0);

            ui.colored_label(p.text_secondary, "Author");
            ui.add_sized(
                [width, 28.0],
                egui::TextEdit::singleline(&mut state.library.book_form.author),
            );
            ui.add_space(8.0);

            ui.colored_label(p.text_secondary, "Description");
            ui.add(
                egui::TextEdit::multiline(&mut state.library.book_form.description)
                    .desired_rows(5)
                    .desired_width(width),
            );
            ui.add_space(8.0);

            ui.colored_label(p.text_secondary, "Genre");
            egui::ComboBox::from_id_salt("book_genre")
                .selected_text(state.library.book_form.genre.clone())
                .show_ui(ui, |ui| {
                    for genre in GENRES {
                        ui.selectable_value(
                            &mut state.library.book_form.genre,
                            genre.to_string(),
                            *genre,
                        );
                    }
                });
            ui.add_space(8.0);

            ui.colored_label(p.text_secondary, "Year Published");
            ui.add_sized(
                [120.0, 28.0],
                egui::TextEdit::singleline(&mut state.library.book_form.year),
            );
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui
                    .add(
                        egui::Button::new(
                            egui::RichText::new("Add Book").color(egui::Color32::WHITE),
                        )
                        .fill(p.accent),
                    )
                    .clicked()
                {
                    submit = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });
    });

    if submit {
        state.submit_book();
    }
    if cancel {
        state.enter_home();
    }
}
