//! Backend Module
//!
//! Server-side code for the Bookshelf application: an Axum HTTP server over
//! a PostgreSQL pool, guarded by JWT bearer authentication.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Signup/login handlers, user store, JWT sessions
//! - **`catalog`** - Book catalog handlers and database operations
//! - **`reviews`** - Review ledger handlers and database operations
//! - **`middleware`** - Bearer-token authentication middleware
//! - **`error`** - API error type and HTTP response mapping
//!
//! # Request Flow
//!
//! ```text
//! client -> router -> [auth middleware on protected routes]
//!        -> handler -> db module -> PgPool -> JSON response
//! ```
//!
//! All handlers share one piece of state, [`server::AppState`], which holds
//! the database pool. Domain failures are expressed as
//! [`error::ApiError`] values and rendered as `{"message": ...}` bodies with
//! the matching status code; no handler path panics.
//!
//! This module is only compiled when the `ssr` feature is enabled.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Book catalog
pub mod catalog;

/// Review ledger
pub mod reviews;

/// Request middleware
pub mod middleware;

/// Backend error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, AppState};
