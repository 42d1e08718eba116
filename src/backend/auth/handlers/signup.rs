/**
 * Signup Handler
 *
 * POST /auth/signup
 *
 * # Registration Process
 *
 * 1. Check required fields (name, email, password)
 * 2. Reject if the email is already registered
 * 3. Hash the password with bcrypt (cost 10)
 * 4. Insert the user and issue a session token
 *
 * Duplicate email answers 400 with "User already exists", the status the
 * public interface has always used for this case.
 */
use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::hash;

use crate::backend::auth::handlers::require_fields;
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{create_user, get_user_by_email};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::auth::{AuthUser, SignupRequest};

/// bcrypt cost factor for new passwords.
const BCRYPT_COST: u32 = 10;

/// Sign up handler
///
/// Creates the account and returns `201` with the user record plus a fresh
/// token, so the client is authenticated immediately after signup.
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthUser>), ApiError> {
    tracing::info!("Signup request for: {}", request.email);

    require_fields(&[
        ("name", &request.name),
        ("email", &request.email),
        ("password", &request.password),
    ])?;

    // Existence check first; the unique index on email is the backstop
    // against a concurrent signup race.
    if get_user_by_email(&state.db_pool, &request.email)
        .await?
        .is_some()
    {
        tracing::warn!("Email already registered: {}", request.email);
        return Err(ApiError::conflict("User already exists"));
    }

    let password_hash = hash(&request.password, BCRYPT_COST)?;

    let user = create_user(
        &state.db_pool,
        request.name.clone(),
        request.email.clone(),
        password_hash,
    )
    .await?;

    let token = create_token(user.id)?;

    tracing::info!("User created: {} ({})", user.name, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthUser {
            id: user.id,
            name: user.name,
            email: user.email,
            token,
        }),
    ))
}
