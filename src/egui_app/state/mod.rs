//! Central Application State
//!
//! One struct owns everything the UI renders: the session, the current
//! view, the catalog state, form buffers, the transient notification and
//! the receivers for in-flight network calls.
//!
//! The view transitions mirror the application's state machine:
//!
//! ```text
//! Login <-> Signup
//!   | success
//!   v
//! Home <-> Profile        (entering either refetches the book list)
//!   | select book
//!   v
//! BookDetails             (entering fetches that book's reviews,
//!   | back                 leaving clears them)
//!   v
//! Home
//! ```
//!
//! Network results are applied only on success; a failed call shows a
//! three-second notification and leaves the previous state untouched.
//! In-flight calls are never cancelled, so a response may arrive after the
//! view has already changed; it is applied to whatever state is current.

use std::sync::mpsc::{channel, Receiver};

use uuid::Uuid;

use crate::egui_app::api;
use crate::egui_app::auth::{self, AuthState};
use crate::egui_app::config::Config;
use crate::egui_app::library::LibraryState;
use crate::egui_app::storage::{Storage, StoredState};
use crate::egui_app::types::{
    AppView, BookForm, LoginForm, Notification, NotificationKind, ReviewForm, SignupForm,
};
use crate::shared::auth::AuthUser;
use crate::shared::catalog::{Book, MessageResponse, NewBook, NewReview, Review};

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub auth_state: AuthState,
    pub current_view: AppView,
    pub dark_mode: bool,
    pub notification: Option<Notification>,

    pub login_form: LoginForm,
    pub signup_form: SignupForm,
    pub library: LibraryState,

    storage: Storage,

    // In-flight network calls, polled once per frame.
    auth_result: Option<Receiver<Result<AuthUser, String>>>,
    auth_notice: &'static str,
    books_result: Option<Receiver<Result<Vec<Book>, String>>>,
    reviews_result: Option<Receiver<Result<Vec<Review>, String>>>,
    add_book_result: Option<Receiver<Result<Book, String>>>,
    delete_book_result: Option<Receiver<Result<MessageResponse, String>>>,
    add_review_result: Option<Receiver<Result<Review, String>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_storage(Storage::new())
    }

    /// Build the state on top of an explicit storage location, rehydrating
    /// any persisted session and dark-mode preference.
    pub fn with_storage(storage: Storage) -> Self {
        let stored = storage.load();
        let mut config = Config::new();
        let mut auth_state = AuthState::new();
        let mut current_view = AppView::Login;

        if let Some(user) = stored.user {
            tracing::info!("Restored session for {}", user.email);
            config.set_token(Some(user.token.clone()));
            auth_state.set_session(user);
            current_view = AppView::Home;
        }

        let mut state = Self {
            config,
            auth_state,
            current_view,
            dark_mode: stored.dark_mode,
            notification: None,
            login_form: LoginForm::default(),
            signup_form: SignupForm::default(),
            library: LibraryState::new(),
            storage,
            auth_result: None,
            auth_notice: "",
            books_result: None,
            reviews_result: None,
            add_book_result: None,
            delete_book_result: None,
            add_review_result: None,
        };

        if state.auth_state.authenticated {
            state.fetch_books();
        }
        state
    }

    // ----- notifications -------------------------------------------------

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.notification = Some(Notification::new(message, kind));
    }

    /// Drop the notification once its three seconds are up.
    pub fn update_notification(&mut self) {
        if self.notification.as_ref().is_some_and(|n| n.expired()) {
            self.notification = None;
        }
    }

    // ----- view transitions ----------------------------------------------

    /// Go to the home view and refetch the catalog.
    pub fn enter_home(&mut self) {
        self.library.selected_book = None;
        self.library.clear_reviews();
        self.current_view = AppView::Home;
        self.fetch_books();
    }

    /// Go to the profile view and refetch the catalog.
    pub fn enter_profile(&mut self) {
        self.library.selected_book = None;
        self.library.clear_reviews();
        self.current_view = AppView::Profile;
        self.fetch_books();
    }

    /// Open the add-book form. Loaded reviews are cleared here too; they
    /// belong to the details view only.
    pub fn enter_add_book(&mut self) {
        self.library.clear_reviews();
        self.current_view = AppView::AddBook;
    }

    /// Open a book's details and fetch its reviews.
    pub fn select_book(&mut self, book: Book) {
        let book_id = book.id;
        self.library.selected_book = Some(book);
        self.library.show_review_form = false;
        self.current_view = AppView::BookDetails;
        self.fetch_reviews(book_id);
    }

    pub fn switch_to_signup(&mut self) {
        self.current_view = AppView::Signup;
    }

    pub fn switch_to_login(&mut self) {
        self.current_view = AppView::Login;
    }

    pub fn logout(&mut self) {
        self.config.clear_token();
        self.auth_state = AuthState::new();
        self.current_view = AppView::Login;
        self.login_form = LoginForm::default();
        self.signup_form = SignupForm::default();
        self.library = LibraryState::new();
        self.storage.save(&StoredState {
            user: None,
            dark_mode: self.dark_mode,
        });
        self.notify("Logged out successfully", NotificationKind::Success);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.persist();
    }

    fn persist(&self) {
        self.storage.save(&StoredState {
            user: self.auth_state.user.clone(),
            dark_mode: self.dark_mode,
        });
    }

    // ----- network calls --------------------------------------------------

    pub fn handle_login(&mut self) {
        if self.login_form.email.is_empty() || self.login_form.password.is_empty() {
            self.notify("Email and password are required", NotificationKind::Error);
            return;
        }

        self.auth_state.loading = true;
        self.auth_notice = "Login successful!";

        let config = self.config.clone();
        let email = self.login_form.email.clone();
        let password = self.login_form.password.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(auth::login(&config, email, password));
        });
        self.auth_result = Some(rx);
    }

    pub fn handle_signup(&mut self) {
        if self.signup_form.name.is_empty()
            || self.signup_form.email.is_empty()
            || self.signup_form.password.is_empty()
        {
            self.notify("Please fill all fields", NotificationKind::Error);
            return;
        }

        self.auth_state.loading = true;
        self.auth_notice = "Account created successfully!";

        let config = self.config.clone();
        let name = self.signup_form.name.clone();
        let email = self.signup_form.email.clone();
        let password = self.signup_form.password.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(auth::signup(&config, name, email, password));
        });
        self.auth_result = Some(rx);
    }

    pub fn fetch_books(&mut self) {
        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api::fetch_books(&config));
        });
        self.books_result = Some(rx);
    }

    pub fn fetch_reviews(&mut self, book_id: Uuid) {
        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api::fetch_reviews(&config, book_id));
        });
        self.reviews_result = Some(rx);
    }

    pub fn submit_book(&mut self) {
        let form = &self.library.book_form;
        if form.title.is_empty() || form.author.is_empty() || form.description.is_empty() {
            self.notify("Please fill all fields", NotificationKind::Error);
            return;
        }

        let new_book = NewBook {
            title: form.title.clone(),
            author: form.author.clone(),
            description: form.description.clone(),
            genre: form.genre.clone(),
            year: form.parsed_year(),
        };

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api::add_book(&config, &new_book));
        });
        self.add_book_result = Some(rx);
    }

    pub fn delete_book(&mut self, book_id: Uuid) {
        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api::delete_book(&config, book_id));
        });
        self.delete_book_result = Some(rx);
    }

    pub fn submit_review(&mut self) {
        let Some(book) = &self.library.selected_book else {
            return;
        };
        if self.library.review_form.review_text.is_empty() {
            self.notify("Review text cannot be empty", NotificationKind::Error);
            return;
        }

        let book_id = book.id;
        let new_review = NewReview {
            rating: self.library.review_form.rating,
            review_text: self.library.review_form.review_text.clone(),
        };

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api::add_review(&config, book_id, &new_review));
        });
        self.add_review_result = Some(rx);
    }

    // ----- result polling -------------------------------------------------

    /// Poll every in-flight call once. Called at the top of each frame.
    pub fn poll_results(&mut self) {
        self.poll_auth();
        self.poll_books();
        self.poll_reviews();
        self.poll_add_book();
        self.poll_delete_book();
        self.poll_add_review();
    }

    fn poll_auth(&mut self) {
        let Some(rx) = &self.auth_result else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.auth_result = None;
        self.auth_state.loading = false;

        match result {
            Ok(user) => {
                tracing::info!("Authenticated as {}", user.email);
                self.config.set_token(Some(user.token.clone()));
                self.auth_state.set_session(user);
                self.persist();
                self.login_form = LoginForm::default();
                self.signup_form = SignupForm::default();
                self.notify(self.auth_notice, NotificationKind::Success);
                self.enter_home();
            }
            Err(e) => self.notify(e, NotificationKind::Error),
        }
    }

    fn poll_books(&mut self) {
        let Some(rx) = &self.books_result else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.books_result = None;

        match result {
            Ok(books) => self.library.books = books,
            Err(_) => self.notify("Could not fetch books.", NotificationKind::Error),
        }
    }

    fn poll_reviews(&mut self) {
        let Some(rx) = &self.reviews_result else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.reviews_result = None;

        match result {
            Ok(reviews) => self.library.reviews = reviews,
            Err(_) => self.notify("Could not fetch reviews.", NotificationKind::Error),
        }
    }

    fn poll_add_book(&mut self) {
        let Some(rx) = &self.add_book_result else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.add_book_result = None;

        match result {
            Ok(_) => {
                self.library.book_form = BookForm::default();
                self.notify("Book added successfully!", NotificationKind::Success);
                self.enter_home();
            }
            Err(e) => self.notify(e, NotificationKind::Error),
        }
    }

    fn poll_delete_book(&mut self) {
        let Some(rx) = &self.delete_book_result else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.delete_book_result = None;

        match result {
            Ok(_) => {
                self.notify("Book deleted successfully!", NotificationKind::Success);
                if self.current_view == AppView::BookDetails {
                    self.enter_home();
                } else {
                    // stay on the current list view, just refresh it
                    self.fetch_books();
                }
            }
            Err(e) => self.notify(e, NotificationKind::Error),
        }
    }

    fn poll_add_review(&mut self) {
        let Some(rx) = &self.add_review_result else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.add_review_result = None;

        match result {
            Ok(_) => {
                self.library.review_form = ReviewForm::default();
                self.library.show_review_form = false;
                self.notify("Review added successfully!", NotificationKind::Success);
                if let Some(book) = &self.library.selected_book {
                    let id = book.id;
                    self.fetch_reviews(id);
                }
            }
            Err(e) => self.notify(e, NotificationKind::Error),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
