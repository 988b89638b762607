//! HTTP Handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{CompleteLoginInput, CompleteLoginUseCase};
use crate::domain::repository::{CredentialVerifier, SessionStore};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::LoginResponse;
use crate::presentation::middleware::GatedLogin;

/// Shared state for auth handlers and the login gate
pub struct AuthAppState<S, V>
where
    S: SessionStore + Send + Sync + 'static,
    V: CredentialVerifier + Send + Sync + 'static,
{
    pub session_store: Arc<S>,
    pub verifier: Arc<V>,
    pub config: Arc<AuthConfig>,
}

// Manual impl: the store and verifier themselves need not be Clone
impl<S, V> Clone for AuthAppState<S, V>
where
    S: SessionStore + Send + Sync + 'static,
    V: CredentialVerifier + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            session_store: self.session_store.clone(),
            verifier: self.verifier.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/host/login, POST /api/customer/login
///
/// Only reached through the login gate, which supplies [`GatedLogin`].
/// Wrong credentials answer 401 with `outcome: proceed`: the submission
/// was counted and the client may submit again.
pub async fn complete_login<S, V>(
    State(state): State<AuthAppState<S, V>>,
    Extension(gated): Extension<GatedLogin>,
) -> AuthResult<Response>
where
    S: SessionStore + Send + Sync + 'static,
    V: CredentialVerifier + Send + Sync + 'static,
{
    let use_case = CompleteLoginUseCase::new(
        state.session_store.clone(),
        state.verifier.clone(),
        state.config.clone(),
    );

    let actor = gated.actor;
    let input = CompleteLoginInput {
        actor,
        identifier: gated.identifier,
        secret: gated.secret,
        session: gated.session,
    };

    match use_case.execute(input).await {
        Ok(_) => Ok(Json(LoginResponse::authorized()).into_response()),
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!(actor = %actor, "Invalid login attempt");
            Ok((StatusCode::UNAUTHORIZED, Json(LoginResponse::proceed())).into_response())
        }
        Err(e) => Err(e),
    }
}
