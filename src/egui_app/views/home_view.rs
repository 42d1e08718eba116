//! Home screen: the searchable, filterable, paginated book grid.
//!
//! All filtering happens in [`LibraryState`](crate::egui_app::LibraryState);
//! this module only renders the current page and routes clicks back into
//! the app state.

use eframe::egui;

use crate::egui_app::library::ALL_GENRES;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{self, colors};
use crate::egui_app::types::SortKey;
use crate::egui_app::views::{genre_tag, preview_text, star_row};
use crate::shared::catalog::{Book, GENRES};

/// Cards per row in the grid.
const GRID_COLUMNS: usize = 3;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let p = *colors::palette(state.dark_mode);

    ui.colored_label(
        p.text_primary,
        egui::RichText::new("Discover Books").size(26.0).strong(),
    );
    ui.add_space(10.0);

    render_filter_bar(ui, state);
    ui.add_space(12.0);

    // Snapshot the current page before handing mutable state to the card
    // closures below.
    let books: Vec<Book> = state
        .library
        .paginated_books()
        .into_iter()
        .cloned()
        .collect();
    let page_count = state.library.page_count();
    let user_id = state.auth_state.user_id();

    let mut open_book: Option<Book> = None;
    let mut delete_book: Option<uuid::Uuid> = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        if books.is_empty() {
            ui.add_space(32.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(p.text_secondary, "No books match your search.");
            });
        }

        for row in books.chunks(GRID_COLUMNS) {
            ui.horizontal_top(|ui| {
                for book in row {
                    theme::card_frame(&p).show(ui, |ui| {
                        ui.set_width(240.0);

                        ui.horizontal(|ui| {
                            if ui
                                .link(
                                    egui::RichText::new(&book.title)
                                        .size(16.0)
                                        .strong()
                                        .color(p.text_primary),
                                )
                                .clicked()
                            {
                                open_book = Some(book.clone());
                            }
                            if user_id == Some(book.added_by) {
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui
                                            .button(egui::RichText::new("🗑").color(p.danger))
                                            .clicked()
                                        {
                                            delete_book = Some(book.id);
                                        }
                                    },
                                );
                            }
                        });

                        ui.horizontal(|ui| {
                            ui.colored_label(
                                p.text_secondary,
                                egui::RichText::new(format!("by {}", book.author)).size(12.0),
                            );
                            genre_tag(ui, &book.genre, &p);
                        });

                        ui.add_space(4.0);
                        ui.colored_label(
                            p.text_secondary,
                            egui::RichText::new(preview_text(&book.description, 90)).size(12.0),
                        );
                        ui.add_space(6.0);

                        ui.horizontal(|ui| {
                            star_row(ui, state.library.average_rating(book.id), &p);
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.colored_label(
                                        p.text_secondary,
                                        egui::RichText::new(book.year.to_string()).size(12.0),
                                    );
                                },
                            );
                        });
                    });
                }
            });
            ui.add_space(8.0);
        }

        if page_count > 1 {
            ui.add_space(8.0);
            render_pagination(ui, state, page_count);
        }
    });

    if let Some(book) = open_book {
        state.select_book(book);
    }
    if let Some(id) = delete_book {
        state.delete_book(id);
    }
}

fn render_filter_bar(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label("🔍");
        ui.add(
            egui::TextEdit::singleline(&mut state.library.search_term)
                .hint_text("Search by title or author...")
                .desired_width(260.0),
        );

        egui::ComboBox::from_id_salt("genre_filter")
            .selected_text(if state.library.selected_genre == ALL_GENRES {
                "All Genres".to_string()
            } else {
                state.library.selected_genre.clone()
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(
                    &mut state.library.selected_genre,
                    ALL_GENRES.to_string(),
                    "All Genres",
                );
                for genre in GENRES {
                    ui.selectable_value(
                        &mut state.library.selected_genre,
                        genre.to_string(),
                        *genre,
                    );
                }
            });

        egui::ComboBox::from_id_salt("sort_by")
            .selected_text(state.library.sort_by.label())
            .show_ui(ui, |ui| {
                ui.selectable_value(
                    &mut state.library.sort_by,
                    SortKey::Title,
                    SortKey::Title.label(),
                );
                ui.selectable_value(
                    &mut state.library.sort_by,
                    SortKey::Year,
                    SortKey::Year.label(),
                );
            });
    });
}

fn render_pagination(ui: &mut egui::Ui, state: &mut AppState, page_count: usize) {
    ui.horizontal(|ui| {
        let current = state.library.current_page;

        if ui
            .add_enabled(current > 1, egui::Button::new("◀"))
            .clicked()
        {
            state.library.current_page = current - 1;
        }

        for page in 1..=page_count {
            if ui.selectable_label(page == current, page.to_string()).clicked() {
                state.library.current_page = page;
            }
        }

        if ui
            .add_enabled(current < page_count, egui::Button::new("▶"))
            .clicked()
        {
            state.library.current_page = current + 1;
        }
    });
}
