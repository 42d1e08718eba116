//! Authentication
//!
//! User persistence, JWT session tokens, and the signup/login handlers.
//!
//! - **`users`** - User row type and database operations
//! - **`sessions`** - Token creation and verification
//! - **`handlers`** - `POST /auth/signup` and `POST /auth/login`

/// User model and database operations
pub mod users;

/// JWT session tokens
pub mod sessions;

/// Auth HTTP handlers
pub mod handlers;

pub use handlers::{login, signup};
