//! Book details screen: full metadata, the review list with its aggregates
//! (average stars and rating histogram, both over this book's loaded
//! reviews), and the write-review form.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{self, colors, Palette};
use crate::egui_app::views::{star_picker, star_row};
use crate::shared::catalog::Review;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let p = *colors::palette(state.dark_mode);

    let Some(book) = state.library.selected_book.clone() else {
        ui.colored_label(p.text_secondary, "Book not found.");
        return;
    };

    if ui.button("◀ Back to Books").clicked() {
        state.enter_home();
        return;
    }
    ui.add_space(8.0);

    let reviews: Vec<Review> = state.library.reviews.clone();
    let average = state.library.average_rating(book.id);
    let distribution = state.library.rating_distribution(book.id);
    let is_owner = state.auth_state.user_id() == Some(book.added_by);

    let mut delete_clicked = false;
    let mut toggle_form = false;
    let mut submit_review = false;

    egui::ScrollArea::vertical().show(ui, |ui| {
        theme::card_frame(&p).show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.colored_label(
                    p.text_primary,
                    egui::RichText::new(&book.title).size(24.0).strong(),
                );
                if is_owner {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button(egui::RichText::new("🗑 Delete").color(p.danger))
                            .clicked()
                        {
                            delete_clicked = true;
                        }
                    });
                }
            });

            ui.colored_label(
                p.text_secondary,
                format!("by {} | {} | {}", book.author, book.year, book.genre),
            );
            ui.add_space(8.0);
            ui.colored_label(p.text_primary, &book.description);
            ui.add_space(4.0);
            ui.colored_label(
                p.text_secondary,
                egui::RichText::new(format!("Added by {}", book.added_by_name)).size(11.0),
            );

            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.colored_label(
                    p.text_primary,
                    egui::RichText::new(format!("Reviews ({})", reviews.len()))
                        .size(18.0)
                        .strong(),
                );
                star_row(ui, average, &p);
            });

            if !reviews.is_empty() {
                ui.add_space(6.0);
                render_histogram(ui, &distribution, &p);
            }

            ui.add_space(8.0);
            let form_label = if state.library.show_review_form {
                "Cancel Review"
            } else {
                "Write a Review"
            };
            if ui
                .add(
                    egui::Button::new(egui::RichText::new(form_label).color(egui::Color32::WHITE))
                        .fill(p.accent),
                )
                .clicked()
            {
                toggle_form = true;
            }

            if state.library.show_review_form {
                ui.add_space(8.0);
                ui.group(|ui| {
                    ui.colored_label(
                        p.text_primary,
                        egui::RichText::new("Your Review").strong(),
                    );
                    ui.add_space(4.0);
                    ui.colored_label(p.text_secondary, "Rating");
                    star_picker(ui, &mut state.library.review_form.rating, &p);
                    ui.add_space(4.0);
                    ui.colored_label(p.text_secondary, "Review");
                    ui.add(
                        egui::TextEdit::multiline(&mut state.library.review_form.review_text)
                            .desired_rows(4)
                            .desired_width(ui.available_width()),
                    );
                    ui.add_space(6.0);
                    if ui
                        .add(
                            egui::Button::new(
                                egui::RichText::new("Submit Review").color(egui::Color32::WHITE),
                            )
                            .fill(p.accent),
                        )
                        .clicked()
                    {
                        submit_review = true;
                    }
                });
            }

            ui.add_space(12.0);
            for review in &reviews {
                render_review(ui, review, &p);
                ui.add_space(6.0);
            }
            if reviews.is_empty() {
                ui.colored_label(p.text_secondary, "No reviews yet for this book.");
            }
        });
    });

    if delete_clicked {
        state.delete_book(book.id);
    }
    if toggle_form {
        state.library.show_review_form = !state.library.show_review_form;
    }
    if submit_review {
        state.submit_review();
    }
}

fn render_review(ui: &mut egui::Ui, review: &Review, p: &Palette) {
    theme::card_frame(p).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.colored_label(
                p.text_primary,
                egui::RichText::new(&review.user_name).strong(),
            );
            star_row(ui, review.rating as f32, p);
        });
        ui.colored_label(p.text_primary, &review.review_text);
        ui.colored_label(
            p.text_secondary,
            egui::RichText::new(review.created_at.format("%b %d, %Y").to_string()).size(11.0),
        );
    });
}

/// Five-row histogram of rating counts, rendered top-down from 5 stars to
/// 1 star with bars scaled to the largest bucket.
fn render_histogram(ui: &mut egui::Ui, distribution: &[usize; 5], p: &Palette) {
    let max = distribution.iter().copied().max().unwrap_or(0).max(1);
    const BAR_WIDTH: f32 = 160.0;

    for rating in (1..=5).rev() {
        let count = distribution[rating - 1];
        ui.horizontal(|ui| {
            ui.colored_label(
                p.text_secondary,
                egui::RichText::new(format!(
                    "{} Star{}",
                    rating,
                    if rating > 1 { "s" } else { "" }
                ))
                .size(11.0),
            );

            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(BAR_WIDTH, 10.0),
                egui::Sense::hover(),
            );
            ui.painter().rect_filled(rect, 2.0, p.star_empty);
            let filled_width = BAR_WIDTH * (count as f32 / max as f32);
            let filled = egui::Rect::from_min_size(
                rect.min,
                egui::vec2(filled_width, rect.height()),
            );
            ui.painter().rect_filled(filled, 2.0, p.star_filled);

            ui.colored_label(p.text_secondary, egui::RichText::new(count.to_string()).size(11.0));
        });
    }
}
