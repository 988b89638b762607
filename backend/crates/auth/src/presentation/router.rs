//! Auth Router

use axum::{Router, middleware::from_fn_with_state, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{CredentialVerifier, SessionStore};
use crate::infra::postgres::{PgCredentialVerifier, PgSessionStore};
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{customer_login_gate, host_login_gate};

/// Create the Auth router with PostgreSQL repositories
pub fn auth_router(
    session_store: PgSessionStore,
    verifier: PgCredentialVerifier,
    config: AuthConfig,
) -> Router {
    auth_router_generic(session_store, verifier, config)
}

/// Create a generic Auth router for any store/verifier implementation
pub fn auth_router_generic<S, V>(session_store: S, verifier: V, config: AuthConfig) -> Router
where
    S: SessionStore + Send + Sync + 'static,
    V: CredentialVerifier + Send + Sync + 'static,
{
    let state = AuthAppState {
        session_store: Arc::new(session_store),
        verifier: Arc::new(verifier),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/host/login",
            post(handlers::complete_login::<S, V>)
                .layer(from_fn_with_state(state.clone(), host_login_gate::<S, V>)),
        )
        .route(
            "/customer/login",
            post(handlers::complete_login::<S, V>)
                .layer(from_fn_with_state(state.clone(), customer_login_gate::<S, V>)),
        )
        .with_state(state)
}
