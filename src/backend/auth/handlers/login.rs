/**
 * Login Handler
 *
 * POST /auth/login
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 401 body, so the
 *   response content cannot be used for user enumeration.
 * - The bcrypt comparison runs on every request: when no user matches the
 *   email, the submitted password is verified against a fixed dummy hash,
 *   so response timing cannot distinguish the two failure cases either.
 */
use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::auth::{AuthUser, LoginRequest};

/// Valid bcrypt hash of a throwaway password. Verified against when the
/// email is unknown, to keep the work factor identical on both paths.
const DUMMY_HASH: &str = "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

/// Login handler
///
/// Returns `200` with the user record plus a fresh token on success, `401`
/// on any credential mismatch.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthUser>, ApiError> {
    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(&state.db_pool, &request.email).await?;

    let stored_hash = user
        .as_ref()
        .map(|u| u.password_hash.as_str())
        .unwrap_or(DUMMY_HASH);

    let valid = verify(&request.password, stored_hash).unwrap_or(false);

    let user = match user {
        Some(user) if valid => user,
        _ => {
            tracing::warn!("Invalid credentials for: {}", request.email);
            return Err(ApiError::unauthorized("Invalid email or password"));
        }
    };

    let token = create_token(user.id)?;

    tracing::info!("User logged in: {} ({})", user.name, user.email);

    Ok(Json(AuthUser {
        id: user.id,
        name: user.name,
        email: user.email,
        token,
    }))
}
