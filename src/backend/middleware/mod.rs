//! Middleware
//!
//! Request middleware for the backend. Currently just bearer-token
//! authentication for the protected routes.

/// Bearer-token authentication
pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
