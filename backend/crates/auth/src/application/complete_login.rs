//! Complete Login Use Case
//!
//! Runs credential verification for a submission the attempt gate let
//! through, and marks the actor's profile authorized on success.
//!
//! Attempt counters are left as they are on success: the gate throttles
//! submissions, not failures.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::domain::entity::SessionRecord;
use crate::domain::repository::{CredentialVerifier, SessionStore};
use crate::domain::value_object::{ActorClass, LoginIdentifier};
use crate::error::{AuthError, AuthResult};

/// Complete login input
pub struct CompleteLoginInput {
    pub actor: ActorClass,
    pub identifier: LoginIdentifier,
    pub secret: String,
    /// Session returned by the gate
    pub session: SessionRecord,
}

/// Complete login use case
pub struct CompleteLoginUseCase<S, V>
where
    S: SessionStore,
    V: CredentialVerifier,
{
    session_store: Arc<S>,
    verifier: Arc<V>,
    config: Arc<AuthConfig>,
}

impl<S, V> CompleteLoginUseCase<S, V>
where
    S: SessionStore,
    V: CredentialVerifier,
{
    pub fn new(session_store: Arc<S>, verifier: Arc<V>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_store,
            verifier,
            config,
        }
    }

    /// Verify credentials; returns the authorized account id
    pub async fn execute(&self, input: CompleteLoginInput) -> AuthResult<i64> {
        self.execute_at(input, Utc::now()).await
    }

    pub async fn execute_at(&self, input: CompleteLoginInput, now: DateTime<Utc>) -> AuthResult<i64> {
        let CompleteLoginInput {
            actor,
            identifier,
            secret,
            mut session,
        } = input;

        let user_id = self
            .verifier
            .verify(actor, &identifier, &secret)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        session.profile_mut(actor).authorize(user_id, now);
        session.refresh(self.config.session_ttl_ms(), now);
        self.session_store.save(&session, actor).await?;

        tracing::info!(
            session_id = %session.id,
            actor = %actor,
            user_id,
            "Login authorized"
        );

        Ok(user_id)
    }
}
