/**
 * Application State Management
 *
 * Defines the application state shared by all request handlers. The only
 * process-wide resource is the database pool, which is internally
 * reference-counted and safe to clone per request.
 */
use axum::extract::FromRef;
use sqlx::PgPool;

/// Central state container for the Axum application.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool backing every store operation
    pub db_pool: PgPool,
}

impl AppState {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

/// Allows handlers to extract `State<PgPool>` directly when they do not
/// need the full `AppState`.
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
