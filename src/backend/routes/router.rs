/**
 * Router Configuration
 *
 * Combines the public and protected route tables into the final Axum
 * router. The auth middleware wraps only the protected table, so the same
 * path can be public for one method and guarded for another
 * (GET /books vs POST /books).
 */
use axum::{http::StatusCode, middleware, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::middleware::auth_middleware;
use crate::backend::routes::api_routes::{protected_routes, public_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured.
pub fn create_router(app_state: AppState) -> Router<()> {
    let protected = protected_routes().route_layer(middleware::from_fn_with_state(
        app_state.clone(),
        auth_middleware,
    ));

    Router::new()
        .merge(public_routes())
        .merge(protected)
        .fallback(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "message": "Not found" })),
            )
        })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
