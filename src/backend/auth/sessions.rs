/**
 * Session Management and JWT Tokens
 *
 * Tokens carry the user id as their only identity claim and expire 30 days
 * after issuance. The signing secret comes from JWT_SECRET; the fallback
 * value exists for local development only.
 */
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Token lifetime: 30 days.
const TOKEN_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Get JWT secret from environment
fn get_jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set, using development fallback");
        "bookshelf-dev-secret-change-in-production".to_string()
    })
}

/// Create a signed session token for a user.
pub fn create_token(user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let claims = Claims {
        id: user_id.to_string(),
        exp: now + TOKEN_TTL.as_secs(),
        iat: now,
    };

    let secret = get_jwt_secret();
    let key = EncodingKey::from_secret(secret.as_ref());

    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a session token.
///
/// Fails on a bad signature or an expired token.
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let secret = get_jwt_secret();
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

/// Extract the user id from a token.
pub fn get_user_id_from_token(token: &str) -> Result<Uuid, String> {
    let claims = verify_token(token).map_err(|e| format!("Token verification failed: {}", e))?;
    Uuid::parse_str(&claims.id).map_err(|e| format!("Invalid user ID in token: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_token() {
        let token = create_token(Uuid::new_v4()).unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_verify_token_round_trip() {
        let user_id = Uuid::new_v4();
        let token = create_token(user_id).unwrap();

        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.id, user_id.to_string());
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL.as_secs());
    }

    #[test]
    fn test_get_user_id_from_token() {
        let user_id = Uuid::new_v4();
        let token = create_token(user_id).unwrap();
        assert_eq!(get_user_id_from_token(&token).unwrap(), user_id);
    }

    #[test]
    fn test_verify_invalid_token() {
        assert!(verify_token("invalid.token.here").is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = create_token(Uuid::new_v4()).unwrap();
        let mut tampered = token.clone();
        tampered.push('x');
        assert!(verify_token(&tampered).is_err());
    }
}
