/**
 * API Error Types
 *
 * One error enum covers the whole failure taxonomy of the REST API:
 *
 * - `Validation` - missing/invalid required field (400)
 * - `Conflict`   - duplicate email on signup (400, per the public API)
 * - `Unauthorized` - bad credentials, bad/expired token, non-owner delete (401)
 * - `NotFound`   - missing book on delete or review-add (404)
 * - `Database`   - sqlx failures; constraint violations surface as 400,
 *   everything else as an opaque 500
 * - `Hash` / `Token` - crypto failures, always an opaque 500
 *
 * The duplicate-email case maps to 400 rather than 409: that is the status
 * the public interface has always used, and the client depends on it.
 */
use axum::http::StatusCode;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Backend API error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid required field in a request body
    #[error("{message}")]
    Validation { message: String },

    /// Duplicate resource (e.g. email already registered)
    #[error("{message}")]
    Conflict { message: String },

    /// Authentication or ownership failure
    #[error("{message}")]
    Unauthorized { message: String },

    /// Referenced resource does not exist
    #[error("{message}")]
    NotFound { message: String },

    /// Database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token issuance failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// True when a database error is a constraint violation, i.e. the
    /// request data broke a schema rule (CHECK, foreign key, uniqueness)
    /// rather than the server failing.
    fn is_constraint_violation(err: &sqlx::Error) -> bool {
        err.as_database_error()
            .map(|db| {
                matches!(
                    db.kind(),
                    ErrorKind::UniqueViolation
                        | ErrorKind::ForeignKeyViolation
                        | ErrorKind::NotNullViolation
                        | ErrorKind::CheckViolation
                )
            })
            .unwrap_or(false)
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(err) if Self::is_constraint_violation(err) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message exposed in the response body. Internal failures are not
    /// leaked to clients.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::Conflict { message }
            | Self::Unauthorized { message }
            | Self::NotFound { message } => message.clone(),
            Self::Database(err) if Self::is_constraint_violation(err) => {
                "Invalid data".to_string()
            }
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => "Server error".to_string(),
        }
    }
}
