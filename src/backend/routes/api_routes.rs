/**
 * API Route Tables
 *
 * Two tables, split by authentication requirement:
 *
 * ## Public
 * - `POST /auth/signup` - user registration
 * - `POST /auth/login`  - user login
 * - `GET  /books`       - full book list
 * - `GET  /reviews/{bookId}` - reviews for a book
 *
 * ## Protected (bearer token)
 * - `POST   /books`        - add a book
 * - `DELETE /books/{id}`   - delete an owned book (cascades to reviews)
 * - `POST   /reviews/{bookId}` - add a review
 *
 * The protected table gets the auth middleware attached in
 * `router::create_router`; keeping the tables separate makes the auth
 * boundary visible in one place.
 */
use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::backend::auth::{login, signup};
use crate::backend::catalog::{add_book, delete_book, list_books};
use crate::backend::reviews::{add_review, list_reviews};
use crate::backend::server::state::AppState;

/// Routes that require no authentication.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/books", get(list_books))
        .route("/reviews/{book_id}", get(list_reviews))
}

/// Routes guarded by the bearer-token middleware.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/books", post(add_book))
        .route("/books/{id}", delete(delete_book))
        .route("/reviews/{book_id}", post(add_review))
}
