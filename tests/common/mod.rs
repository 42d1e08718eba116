//! Common test utilities
//!
//! Shared fixtures for the API integration tests: a migrated test database
//! and helpers for creating authenticated users.
//!
//! The database-backed tests need a running PostgreSQL instance (set
//! `DATABASE_URL`, or use the default local test database) and are marked
//! `#[ignore]` so the rest of the suite passes without one.

#[cfg(feature = "ssr")]
pub mod auth_helpers;
#[cfg(feature = "ssr")]
pub mod database;

#[cfg(feature = "ssr")]
#[allow(unused_imports)]
pub use auth_helpers::*;
#[cfg(feature = "ssr")]
#[allow(unused_imports)]
pub use database::*;
