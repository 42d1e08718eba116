//! Review Ledger
//!
//! Database operations and HTTP handlers for book reviews.
//!
//! - **`db`** - sqlx queries
//! - **`handlers`** - `GET /reviews/{bookId}`, `POST /reviews/{bookId}`

/// Database operations for reviews
pub mod db;

/// Review HTTP handlers
pub mod handlers;

pub use handlers::{add_review, list_reviews};
