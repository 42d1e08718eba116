//! Routes
//!
//! Router assembly for the REST API.
//!
//! - **`api_routes`** - public and protected route tables
//! - **`router`** - merges the tables, applies middleware and layers

/// Route tables
pub mod api_routes;

/// Router assembly
pub mod router;

pub use router::create_router;
