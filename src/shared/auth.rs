//! Auth Wire Types
//!
//! Request and response bodies for the `/auth/signup` and `/auth/login`
//! endpoints. Both endpoints return the same shape: the user record with a
//! freshly issued session token, which the client persists verbatim.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /auth/login`.
///
/// Fields default to empty strings so a missing field surfaces as a
/// required-field validation error rather than a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Default for LoginRequest {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
        }
    }
}

/// Body of `POST /auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Default for SignupRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
        }
    }
}

/// Authenticated user as returned by signup/login and persisted by the
/// client under the `user` storage key. The password hash never leaves the
/// server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_user_serializes_with_mongo_style_id() {
        let user = AuthUser {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            token: "tok".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("_id").is_some());
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Ana");
    }

    #[test]
    fn login_request_tolerates_missing_fields() {
        let req: LoginRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert_eq!(req.email, "a@x.com");
        assert!(req.password.is_empty());
    }

    #[test]
    fn signup_request_round_trip() {
        let req = SignupRequest {
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            password: "pw123456".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        let back: SignupRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, req.name);
        assert_eq!(back.email, req.email);
    }
}
