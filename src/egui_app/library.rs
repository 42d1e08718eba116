/**
 * Library State
 *
 * Client-side catalog state: the loaded book list, the reviews of the
 * currently open book, and the filter/sort/pagination settings the home
 * view applies to the full list (the server never filters).
 *
 * Rating aggregates are computed over the loaded reviews only, that is,
 * the reviews of the currently open book. Loading every review of every
 * book just to sort or decorate the list would not scale, so the list
 * view simply shows zero stars until a book is opened.
 */
use uuid::Uuid;

use crate::egui_app::types::{BookForm, ReviewForm, SortKey};
use crate::shared::catalog::{Book, Review};

/// Books shown per page in the home view.
pub const PAGE_SIZE: usize = 6;

/// Genre filter value that passes every book through.
pub const ALL_GENRES: &str = "All";

/// Client-side catalog state.
pub struct LibraryState {
    /// Full book list, as last fetched
    pub books: Vec<Book>,
    /// Reviews of the currently open book; cleared when leaving details
    pub reviews: Vec<Review>,
    /// Book currently open in the details view
    pub selected_book: Option<Book>,

    /// Search term, matched against title and author
    pub search_term: String,
    /// Genre filter, `"All"` or one of the fixed genres
    pub selected_genre: String,
    /// Sort key for the list
    pub sort_by: SortKey,
    /// Current page, 1-based
    pub current_page: usize,

    /// Whether the review form is open in the details view
    pub show_review_form: bool,
    /// Add-book form buffer
    pub book_form: BookForm,
    /// Review form buffer
    pub review_form: ReviewForm,
}

impl Default for LibraryState {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryState {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            reviews: Vec::new(),
            selected_book: None,
            search_term: String::new(),
            selected_genre: ALL_GENRES.to_string(),
            sort_by: SortKey::Title,
            current_page: 1,
            show_review_form: false,
            book_form: BookForm::default(),
            review_form: ReviewForm::default(),
        }
    }

    /// Clear the loaded reviews (on leaving the details view).
    pub fn clear_reviews(&mut self) {
        self.reviews.clear();
    }

    /// Books passing the search term and genre filter, sorted.
    ///
    /// The search is a case-insensitive substring match on title OR author.
    /// Title sorts ascending, year descending (newest first). Rating is a
    /// no-op (see the module docs).
    pub fn filtered_books(&self) -> Vec<&Book> {
        let needle = self.search_term.to_lowercase();

        let mut books: Vec<&Book> = self
            .books
            .iter()
            .filter(|book| {
                let matches_search = book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle);
                let matches_genre =
                    self.selected_genre == ALL_GENRES || book.genre == self.selected_genre;
                matches_search && matches_genre
            })
            .collect();

        match self.sort_by {
            SortKey::Title => books.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase())),
            SortKey::Year => books.sort_by(|a, b| b.year.cmp(&a.year)),
            SortKey::Rating => {}
        }

        books
    }

    /// Number of pages the filtered list occupies.
    pub fn page_count(&self) -> usize {
        self.filtered_books().len().div_ceil(PAGE_SIZE)
    }

    /// The current page of the filtered list. A page past the end (after
    /// narrowing a filter) yields an empty slice rather than panicking.
    pub fn paginated_books(&self) -> Vec<&Book> {
        let filtered = self.filtered_books();
        let start = (self.current_page.saturating_sub(1)) * PAGE_SIZE;
        filtered
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .collect()
    }

    /// Average rating of a book over the loaded reviews; 0 when none are
    /// loaded for it.
    pub fn average_rating(&self, book_id: Uuid) -> f32 {
        let ratings: Vec<i32> = self
            .reviews
            .iter()
            .filter(|r| r.book_id == book_id)
            .map(|r| r.rating)
            .collect();

        if ratings.is_empty() {
            return 0.0;
        }
        ratings.iter().sum::<i32>() as f32 / ratings.len() as f32
    }

    /// Histogram of the loaded reviews for a book: counts for ratings
    /// 1 through 5, in that order.
    pub fn rating_distribution(&self, book_id: Uuid) -> [usize; 5] {
        let mut buckets = [0usize; 5];
        for review in self.reviews.iter().filter(|r| r.book_id == book_id) {
            if (1..=5).contains(&review.rating) {
                buckets[(review.rating - 1) as usize] += 1;
            }
        }
        buckets
    }

    /// Books added by the given user, for the profile view.
    pub fn books_by(&self, user_id: Uuid) -> Vec<&Book> {
        self.books.iter().filter(|b| b.added_by == user_id).collect()
    }
}
