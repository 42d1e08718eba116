//! Book Catalog
//!
//! Database operations and HTTP handlers for the book collection.
//!
//! - **`db`** - sqlx queries, including the transactional cascade delete
//! - **`handlers`** - `GET /books`, `POST /books`, `DELETE /books/{id}`

/// Database operations for books
pub mod db;

/// Book HTTP handlers
pub mod handlers;

pub use handlers::{add_book, delete_book, list_books};
