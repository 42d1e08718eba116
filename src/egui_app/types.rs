/**
 * Client Types
 *
 * View-state machine, sort keys, transient notifications and the form
 * buffers backing the input widgets.
 */
use std::time::Instant;

use crate::shared::catalog::GENRES;

/// Current app view. Transitions are driven by user actions: login success
/// leads to `Home`, selecting a book leads to `BookDetails`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Login screen
    Login,
    /// Signup screen
    Signup,
    /// Book list with search/filter/pagination
    Home,
    /// Single book with its reviews
    BookDetails,
    /// Add-book form
    AddBook,
    /// Current user's profile and their books
    Profile,
}

/// Sort key for the home view book list.
///
/// `Rating` is a no-op: a real rating sort would need every review of
/// every book, and only the open book's reviews are ever loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Year,
    Rating,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Title => "Sort by Title",
            SortKey::Year => "Sort by Year",
            SortKey::Rating => "Sort by Rating",
        }
    }
}

/// Kind of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient notification, dismissed automatically after three seconds.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    /// Seconds a notification stays on screen.
    pub const TTL_SECS: u64 = 3;

    pub fn expired(&self) -> bool {
        self.shown_at.elapsed().as_secs() >= Self::TTL_SECS
    }
}

/// Login form buffer.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Signup form buffer.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Add-book form buffer. The year is edited as text and parsed on submit;
/// unparsable input falls back to the current year, like the original form.
#[derive(Debug, Clone)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
    pub year: String,
}

impl Default for BookForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            description: String::new(),
            genre: GENRES[0].to_string(),
            year: current_year().to_string(),
        }
    }
}

impl BookForm {
    /// Parse the year buffer, falling back to the current year.
    pub fn parsed_year(&self) -> i32 {
        self.year.trim().parse().unwrap_or_else(|_| current_year())
    }
}

/// Review form buffer.
#[derive(Debug, Clone)]
pub struct ReviewForm {
    pub rating: i32,
    pub review_text: String,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self {
            rating: 5,
            review_text: String::new(),
        }
    }
}

pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}
