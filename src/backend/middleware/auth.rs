/**
 * Authentication Middleware
 *
 * Guards the protected routes. Extracts the bearer token from the
 * Authorization header, verifies it, resolves the embedded user id to a
 * live user row, and attaches that user to the request extensions so
 * handlers can read the owner's id and display name without another
 * lookup.
 *
 * Any failure along the way (missing header, malformed header, bad
 * signature, expired token, deleted user) is a plain 401.
 */
use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::verify_token;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Authenticated user resolved from the session token.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Authentication middleware for protected routes.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::unauthorized("Not authorized, no token")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::unauthorized("Not authorized, no token")
    })?;

    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ApiError::unauthorized("Not authorized, token failed")
    })?;

    let user_id = Uuid::parse_str(&claims.id)
        .map_err(|_| ApiError::unauthorized("Not authorized, token failed"))?;

    // Resolve to a live user row; a token for a vanished user is dead.
    let user = get_user_by_id(&state.db_pool, user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token for unknown user: {}", user_id);
            ApiError::unauthorized("Not authorized, token failed")
        })?;

    request.extensions_mut().insert(AuthenticatedUser {
        id: user.id,
        name: user.name,
        email: user.email,
    });

    Ok(next.run(request).await)
}

/// Extractor for the authenticated user attached by [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::unauthorized("Not authorized, no token")
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;

    #[tokio::test]
    async fn extractor_reads_user_from_extensions() {
        let user = AuthenticatedUser {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
        };

        let mut request = axum::http::Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();
        request.extensions_mut().insert(user.clone());
        let (mut parts, _) = request.into_parts();

        let extracted = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted.0.id, user.id);
        assert_eq!(extracted.0.name, "Ana");
    }

    #[tokio::test]
    async fn extractor_rejects_when_missing() {
        let request = axum::http::Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    }
}
