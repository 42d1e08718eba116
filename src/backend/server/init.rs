/**
 * Server Initialization
 *
 * Builds the Axum application from a connected database pool. Split from
 * the entry point so integration tests can construct the exact same app
 * against a test database.
 */
use axum::Router;
use sqlx::PgPool;

use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application.
///
/// The caller provides a connected (and migrated) pool; the routes, auth
/// middleware, tracing and CORS layers are assembled here.
pub fn create_app(pool: PgPool) -> Router<()> {
    tracing::info!("Initializing Bookshelf backend");

    let app_state = AppState::new(pool);
    create_router(app_state)
}
