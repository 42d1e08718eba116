//! Bookshelf - Main Library
//!
//! Bookshelf is a small full-stack book-review application: an Axum REST
//! backend over PostgreSQL and a native egui desktop client. Users sign up,
//! log in, add and delete books, and post star ratings with text reviews.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between the client and the backend
//!   - Wire types for users, books and reviews
//!   - Configuration builder and shared error types
//!
//! - **`backend`** - Server-side code (only compiled with the `ssr` feature)
//!   - Axum HTTP server with JWT authentication
//!   - Book catalog and review ledger over sqlx/PostgreSQL
//!
//! - **`egui_app`** - Native desktop client (egui/eframe)
//!   - Login/signup, book browsing with search/filter/pagination
//!   - Per-book review aggregates computed client-side
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules (Axum server, database, auth
//!   crypto). Required for server builds; the client builds without it.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
pub mod egui_app;
