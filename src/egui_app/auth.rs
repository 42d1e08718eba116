/**
 * Authentication Module
 *
 * Session state plus the HTTP client functions for login and signup. Both
 * endpoints return the same `{_id, name, email, token}` payload, which the
 * caller persists and installs as the current session.
 */
use reqwest::Client;
use tokio::runtime::Runtime;

use crate::egui_app::api::error_message;
use crate::egui_app::config::Config;
use crate::shared::auth::{AuthUser, LoginRequest, SignupRequest};

/// Authentication state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub authenticated: bool,
    pub user: Option<AuthUser>,
    pub loading: bool,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a session after a successful login/signup.
    pub fn set_session(&mut self, user: AuthUser) {
        self.authenticated = true;
        self.user = Some(user);
        self.loading = false;
    }

    /// Id of the signed-in user, if any.
    pub fn user_id(&self) -> Option<uuid::Uuid> {
        self.user.as_ref().map(|u| u.id)
    }
}

/// Log in with email and password.
pub fn login(config: &Config, email: String, password: String) -> Result<AuthUser, String> {
    let client = Client::new();
    let url = config.api_url("/auth/login");

    let request = LoginRequest { email, password };

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(error_message(status, &body));
        }

        response
            .json::<AuthUser>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    })
}

/// Create a new account.
pub fn signup(
    config: &Config,
    name: String,
    email: String,
    password: String,
) -> Result<AuthUser, String> {
    let client = Client::new();
    let url = config.api_url("/auth/signup");

    let request = SignupRequest {
        name,
        email,
        password,
    };

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(error_message(status, &body));
        }

        response
            .json::<AuthUser>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;
    use uuid::Uuid;

    fn config_for(url: &str) -> Config {
        Config::with_builder(AppConfig::builder().server_url(url.to_string())).unwrap()
    }

    #[test]
    fn test_auth_state_starts_signed_out() {
        let state = AuthState::new();
        assert!(!state.authenticated);
        assert!(state.user.is_none());
        assert!(state.user_id().is_none());
    }

    #[test]
    fn test_set_session() {
        let mut state = AuthState::new();
        let id = Uuid::new_v4();
        state.set_session(AuthUser {
            id,
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            token: "tok".to_string(),
        });
        assert!(state.authenticated);
        assert_eq!(state.user_id(), Some(id));
    }

    #[test]
    fn login_parses_auth_payload() {
        let mut server = mockito::Server::new();
        let id = Uuid::new_v4();
        let body = serde_json::json!({
            "_id": id,
            "name": "Ana",
            "email": "a@x.com",
            "token": "jwt-token",
        });
        let _m = server
            .mock("POST", "/auth/login")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create();

        let user = login(
            &config_for(&server.url()),
            "a@x.com".to_string(),
            "pw123456".to_string(),
        )
        .unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.token, "jwt-token");
    }

    #[test]
    fn login_surfaces_server_message() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/auth/login")
            .with_status(401)
            .with_body(r#"{"message":"Invalid email or password"}"#)
            .create();

        let err = login(
            &config_for(&server.url()),
            "a@x.com".to_string(),
            "wrong".to_string(),
        )
        .unwrap_err();
        assert_eq!(err, "Invalid email or password");
    }

    #[test]
    fn signup_surfaces_conflict_message() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/auth/signup")
            .with_status(400)
            .with_body(r#"{"message":"User already exists"}"#)
            .create();

        let err = signup(
            &config_for(&server.url()),
            "Ana".to_string(),
            "a@x.com".to_string(),
            "pw123456".to_string(),
        )
        .unwrap_err();
        assert_eq!(err, "User already exists");
    }
}
