//! API DTOs (Data Transfer Objects)

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Login
// ============================================================================

/// Login request body, shared by the host and customer routes
#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// What happened to a login submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoginOutcome {
    Proceed,
    AlreadyAuthorized,
    Locked,
    Authorized,
}

/// Login response body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub outcome: LoginOutcome,
    pub message: String,
    /// Minutes until a lockout clears (locked responses only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_left_minutes: Option<f64>,
}

impl LoginResponse {
    /// Gate let the submission through but the credentials did not match
    pub fn proceed() -> Self {
        Self {
            outcome: LoginOutcome::Proceed,
            message: "Email or Password provided are incorrect, please try again.".to_string(),
            time_left_minutes: None,
        }
    }

    pub fn already_authorized() -> Self {
        Self {
            outcome: LoginOutcome::AlreadyAuthorized,
            message: "user already authorized with application.".to_string(),
            time_left_minutes: None,
        }
    }

    pub fn locked(time_left_minutes: f64) -> Self {
        Self {
            outcome: LoginOutcome::Locked,
            message: "You have been locked out for too many attempts to login..".to_string(),
            time_left_minutes: Some(time_left_minutes),
        }
    }

    pub fn authorized() -> Self {
        Self {
            outcome: LoginOutcome::Authorized,
            message: "user authorized with application.".to_string(),
            time_left_minutes: None,
        }
    }
}
