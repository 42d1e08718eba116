//! Shared Module
//!
//! Types used by both the backend server and the egui client:
//!
//! - **`auth`** - Signup/login request bodies and the authenticated user
//!   payload returned by the auth endpoints
//! - **`catalog`** - Book and review wire types plus the genre list
//! - **`config`** - Application configuration builder
//! - **`error`** - Error types shared across both binaries
//!
//! Everything here serializes with the field names the HTTP API exposes
//! (`_id`, `addedByName`, `reviewText`, ...), so the client and the server
//! cannot drift apart on the wire format.

/// Auth request/response types
pub mod auth;

/// Book and review wire types
pub mod catalog;

/// Application configuration
pub mod config;

/// Shared error types
pub mod error;

// Re-export commonly used types
pub use auth::{AuthUser, LoginRequest, SignupRequest};
pub use catalog::{Book, MessageResponse, NewBook, NewReview, Review, GENRES};
pub use error::SharedError;
