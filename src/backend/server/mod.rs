//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Environment-driven configuration (database pool)
//! - **`init`** - Router/app creation
//!
//! # Initialization Flow
//!
//! 1. Load `DATABASE_URL` and connect a `PgPool`
//! 2. Run sqlx migrations
//! 3. Build [`AppState`] and hand it to the router
//!
//! Unlike optional side services, the database is mandatory: the server
//! refuses to start without a reachable PostgreSQL instance, because every
//! endpoint needs it.

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::create_app;
pub use state::AppState;
