//! Profile screen: the signed-in user's details and the books they added.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{self, colors};
use crate::egui_app::views::genre_tag;
use crate::shared::catalog::Book;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let p = *colors::palette(state.dark_mode);

    let Some(user) = state.auth_state.user.clone() else {
        ui.colored_label(p.text_secondary, "Not signed in.");
        return;
    };

    let my_books: Vec<Book> = state
        .library
        .books_by(user.id)
        .into_iter()
        .cloned()
        .collect();

    let mut open_book: Option<Book> = None;
    let mut delete_book: Option<uuid::Uuid> = None;

    ui.vertical_centered(|ui| {
        ui.set_max_width(700.0);

        theme::card_frame(&p).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.colored_label(p.accent, egui::RichText::new("👤").size(36.0));
                ui.vertical(|ui| {
                    ui.colored_label(
                        p.text_primary,
                        egui::RichText::new(&user.name).size(20.0).strong(),
                    );
                    ui.colored_label(p.text_secondary, &user.email);
                });
            });
        });

        ui.add_space(12.0);
        ui.colored_label(
            p.text_primary,
            egui::RichText::new(format!("Your Books ({})", my_books.len()))
                .size(18.0)
                .strong(),
        );
        ui.add_space(8.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            if my_books.is_empty() {
                ui.colored_label(p.text_secondary, "You haven't added any books yet.");
            }

            for book in &my_books {
                theme::card_frame(&p).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        if ui
                            .link(
                                egui::RichText::new(&book.title)
                                    .strong()
                                    .color(p.text_primary),
                            )
                            .clicked()
                        {
                            open_book = Some(book.clone());
                        }
                        ui.colored_label(
                            p.text_secondary,
                            egui::RichText::new(format!("{}", book.year)).size(12.0),
                        );
                        genre_tag(ui, &book.genre, &p);

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .button(egui::RichText::new("🗑").color(p.danger))
                                .clicked()
                            {
                                delete_book = Some(book.id);
                            }
                        });
                    });
                });
                ui.add_space(6.0);
            }
        });
    });

    if let Some(book) = open_book {
        state.select_book(book);
    }
    if let Some(id) = delete_book {
        state.delete_book(id);
    }
}
