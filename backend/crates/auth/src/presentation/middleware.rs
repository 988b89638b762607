//! Login Gate Middleware
//!
//! Runs the attempt gate in front of the credential handler. One generic
//! gate serves both actor classes; [`host_login_gate`] and
//! [`customer_login_gate`] only pick the profile.

use std::fmt;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{Request, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::{LoginAttemptInput, LoginAttemptUseCase};
use crate::domain::entity::SessionRecord;
use crate::domain::repository::{CredentialVerifier, SessionStore};
use crate::domain::service::GateOutcome;
use crate::domain::value_object::{ActorClass, LoginIdentifier};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginRequest, LoginResponse};
use crate::presentation::handlers::AuthAppState;

/// Largest login body accepted
const MAX_LOGIN_BODY_BYTES: usize = 16 * 1024;

/// A submission the gate let through, stored in request extensions
#[derive(Clone)]
pub struct GatedLogin {
    pub actor: ActorClass,
    pub identifier: LoginIdentifier,
    pub secret: String,
    /// Session as persisted by the gate
    pub session: SessionRecord,
}

impl fmt::Debug for GatedLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatedLogin")
            .field("actor", &self.actor)
            .field("identifier", &self.identifier)
            .field("session_id", &self.session.id)
            .finish_non_exhaustive()
    }
}

/// Gate for `POST /host/login`
pub async fn host_login_gate<S, V>(
    State(state): State<AuthAppState<S, V>>,
    req: Request<Body>,
    next: Next,
) -> Response
where
    S: SessionStore + Send + Sync + 'static,
    V: CredentialVerifier + Send + Sync + 'static,
{
    login_gate(ActorClass::Host, state, req, next).await
}

/// Gate for `POST /customer/login`
pub async fn customer_login_gate<S, V>(
    State(state): State<AuthAppState<S, V>>,
    req: Request<Body>,
    next: Next,
) -> Response
where
    S: SessionStore + Send + Sync + 'static,
    V: CredentialVerifier + Send + Sync + 'static,
{
    login_gate(ActorClass::Customer, state, req, next).await
}

/// Evaluate a login submission for `actor`
///
/// Rejections are answered here. On proceed the request continues with a
/// [`GatedLogin`] extension and the response gets the session cookie.
pub async fn login_gate<S, V>(
    actor: ActorClass,
    state: AuthAppState<S, V>,
    req: Request<Body>,
    next: Next,
) -> Response
where
    S: SessionStore + Send + Sync + 'static,
    V: CredentialVerifier + Send + Sync + 'static,
{
    match run_gate(actor, state, req, next).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

async fn run_gate<S, V>(
    actor: ActorClass,
    state: AuthAppState<S, V>,
    req: Request<Body>,
    next: Next,
) -> AuthResult<Response>
where
    S: SessionStore + Send + Sync + 'static,
    V: CredentialVerifier + Send + Sync + 'static,
{
    let use_case = LoginAttemptUseCase::new(state.session_store.clone(), state.config.clone());

    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);
    let session = use_case.resolve_session(token.as_deref()).await?;

    // Signed-in profiles short-circuit before the body is looked at
    if session
        .as_ref()
        .is_some_and(|s| s.profile(actor).is_authorized())
    {
        tracing::debug!(actor = %actor, "Login request on already authorized profile");
        return Ok(Json(LoginResponse::already_authorized()).into_response());
    }

    let (parts, body) = req.into_parts();
    let (bytes, login) = read_login_request(body).await?;
    let identifier = LoginIdentifier::new(&login.email)?;

    let input = LoginAttemptInput {
        actor,
        identifier: identifier.clone(),
    };
    let output = use_case.execute(input, session).await?;

    match output.outcome {
        GateOutcome::Locked { time_left_minutes } => {
            return Ok((
                StatusCode::TOO_MANY_REQUESTS,
                Json(LoginResponse::locked(time_left_minutes)),
            )
                .into_response());
        }
        GateOutcome::AlreadyAuthorized => {
            return Ok(Json(LoginResponse::already_authorized()).into_response());
        }
        _ => {}
    }

    let cookie = state.config.cookie().set_cookie_header(&output.session_token);

    let mut req = Request::from_parts(parts, Body::from(bytes));
    req.extensions_mut().insert(GatedLogin {
        actor,
        identifier,
        secret: login.password,
        session: output.session,
    });

    let mut response = next.run(req).await;

    match cookie {
        Some(cookie) => {
            response.headers_mut().append(header::SET_COOKIE, cookie);
        }
        None => tracing::error!("Session cookie could not be encoded as a header"),
    }

    Ok(response)
}

async fn read_login_request(body: Body) -> AuthResult<(Bytes, LoginRequest)> {
    let bytes = axum::body::to_bytes(body, MAX_LOGIN_BODY_BYTES)
        .await
        .map_err(|e| AuthError::MalformedRequest(e.to_string()))?;

    let login = serde_json::from_slice(&bytes)
        .map_err(|e| AuthError::MalformedRequest(e.to_string()))?;

    Ok((bytes, login))
}
