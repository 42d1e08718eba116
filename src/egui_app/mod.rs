//! egui Native Desktop App Module
//!
//! Native desktop client for Bookshelf, built with egui/eframe. It talks to
//! the Axum backend over REST and keeps all list filtering, sorting,
//! pagination and rating aggregation on the client side.
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs      - Module exports
//! ├── main.rs     - Application entry point (binary)
//! ├── config.rs   - Server URL and token handling
//! ├── auth.rs     - Auth API calls and session state
//! ├── api.rs      - Book/review API calls
//! ├── types.rs    - View enum, sort keys, notifications, form buffers
//! ├── library.rs  - Catalog state: filtering, pagination, aggregates
//! ├── storage.rs  - Durable session + dark-mode persistence
//! ├── state/      - Central application state and transitions
//! ├── theme/      - Light/dark palettes and styling
//! └── views/      - One module per screen
//! ```
//!
//! # Threading
//!
//! egui is an immediate-mode UI on a single thread. Every network call runs
//! on a short-lived worker thread and reports back over an mpsc channel
//! that the state polls once per frame, so the UI never blocks. In-flight
//! requests are not cancelled on view changes; a late response simply lands
//! in whatever state is current.

pub mod api;
pub mod auth;
pub mod config;
pub mod library;
pub mod state;
pub mod storage;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use auth::AuthState;
pub use config::Config;
pub use library::LibraryState;
pub use state::AppState;
pub use types::{AppView, Notification, NotificationKind, SortKey};
