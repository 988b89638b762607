//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Lockout and already-authorized are gate outcomes, not errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login identifier missing or unusable
    #[error("Invalid login identifier: {0}")]
    InvalidIdentifier(String),

    /// Request body could not be read as a login request
    #[error("Malformed login request: {0}")]
    MalformedRequest(String),

    /// Credential check rejected the identifier/secret pair
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Stored session envelope could not be encoded or decoded
    #[error("Session encoding error: {0}")]
    SessionCodec(#[from] serde_json::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidIdentifier(_) | AuthError::MalformedRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::SessionCodec(_) | AuthError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidIdentifier(_) | AuthError::MalformedRequest(_) => {
                ErrorKind::BadRequest
            }
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::SessionCodec(_) | AuthError::Database(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures get a generic message; the original error is
    /// kept as the source and never rendered.
    pub fn into_app_error(self) -> AppError {
        match self.kind() {
            ErrorKind::InternalServerError => {
                AppError::internal("Something went wrong..").with_source(self)
            }
            ErrorKind::BadRequest => AppError::bad_request(
                "Email or Password provided are incorrect, please try again.",
            ),
            ErrorKind::Unauthorized => AppError::unauthorized(self.to_string()),
            kind => AppError::new(kind, self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        if self.kind().is_server_error() {
            tracing::error!(error = %self, "Login request failed");
        } else {
            tracing::debug!(error = %self, "Login request rejected");
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
