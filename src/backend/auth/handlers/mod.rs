//! Auth HTTP Handlers
//!
//! - **`signup`** - `POST /auth/signup`
//! - **`login`** - `POST /auth/login`
//!
//! Both return the `{_id, name, email, token}` payload the client persists
//! as its session.

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

pub use login::login;
pub use signup::signup;

use crate::backend::error::ApiError;

/// Reject the request if any required string field is empty or missing.
/// Missing fields deserialize to empty strings, so one check covers both.
pub(crate) fn require_fields(fields: &[(&str, &str)]) -> Result<(), ApiError> {
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(ApiError::validation(format!("{} is required", name)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_fields_passes_when_all_present() {
        assert!(require_fields(&[("name", "Ana"), ("email", "a@x.com")]).is_ok());
    }

    #[test]
    fn require_fields_rejects_empty_value() {
        let err = require_fields(&[("name", "Ana"), ("password", "")]).unwrap_err();
        assert_eq!(err.public_message(), "password is required");
    }

    #[test]
    fn require_fields_rejects_whitespace_only() {
        assert!(require_fields(&[("title", "   ")]).is_err());
    }
}
