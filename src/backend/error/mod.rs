//! Backend Error Module
//!
//! Error types for the HTTP handlers and their conversion to responses.
//!
//! - **`types`** - [`ApiError`] definition and status-code mapping
//! - **`conversion`** - `IntoResponse` implementation
//!
//! Every domain failure the API can produce (duplicate email, bad
//! credentials, missing book, non-owner delete, invalid body) is a
//! variant of [`ApiError`]. Handlers return `Result<_, ApiError>` and let
//! the conversion layer render the `{"message": ...}` JSON body.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
