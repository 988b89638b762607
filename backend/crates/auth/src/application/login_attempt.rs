//! Login Attempt Use Case
//!
//! Resolves the caller's session, runs the attempt gate for one actor
//! class, and persists the result.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::application::session_token::{issue_session_token, verify_session_token};
use crate::domain::entity::SessionRecord;
use crate::domain::repository::SessionStore;
use crate::domain::service::{AttemptGate, GateOutcome};
use crate::domain::value_object::{ActorClass, LoginIdentifier};
use crate::error::AuthResult;

/// Login attempt input
pub struct LoginAttemptInput {
    /// Which profile the submission targets
    pub actor: ActorClass,
    /// Submitted identifier (already validated upstream)
    pub identifier: LoginIdentifier,
}

/// Login attempt output
pub struct LoginAttemptOutput {
    pub outcome: GateOutcome,
    /// The session as it now stands (persisted if `outcome` mutated it)
    pub session: SessionRecord,
    /// Signed cookie value for `session`
    pub session_token: String,
    /// Whether the session was created by this submission
    pub created: bool,
}

/// Login attempt use case
pub struct LoginAttemptUseCase<S>
where
    S: SessionStore,
{
    session_store: Arc<S>,
    config: Arc<AuthConfig>,
    gate: AttemptGate,
}

impl<S> LoginAttemptUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session_store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        let gate = AttemptGate::new(config.lockout);
        Self {
            session_store,
            config,
            gate,
        }
    }

    /// Look up the session referenced by a cookie value
    ///
    /// Missing, tampered, unknown and expired tokens all resolve to `None`.
    /// Store failures are returned as errors.
    pub async fn resolve_session(
        &self,
        session_token: Option<&str>,
    ) -> AuthResult<Option<SessionRecord>> {
        let Some(session_id) =
            session_token.and_then(|token| verify_session_token(token, &self.config.session_secret))
        else {
            if session_token.is_some() {
                tracing::debug!("Session cookie failed verification, treating as absent");
            }
            return Ok(None);
        };

        self.session_store.find(&session_id).await
    }

    /// Evaluate a submission at the current time
    pub async fn execute(
        &self,
        input: LoginAttemptInput,
        session: Option<SessionRecord>,
    ) -> AuthResult<LoginAttemptOutput> {
        self.execute_at(input, session, Utc::now()).await
    }

    /// Evaluate a submission at `now`
    pub async fn execute_at(
        &self,
        input: LoginAttemptInput,
        session: Option<SessionRecord>,
        now: DateTime<Utc>,
    ) -> AuthResult<LoginAttemptOutput> {
        let ttl_ms = self.config.session_ttl_ms();

        let (mut session, created) = match session {
            Some(session) => (session, false),
            None => (SessionRecord::new(ttl_ms, now), true),
        };

        let outcome = self
            .gate
            .evaluate(session.profile_mut(input.actor), &input.identifier, now);

        if created {
            self.session_store.create(&session).await?;
            tracing::info!(
                session_id = %session.id,
                actor = %input.actor,
                outcome = outcome.code(),
                "Login session created"
            );
        } else if outcome.mutated() {
            session.refresh(ttl_ms, now);
            self.session_store.save(&session, input.actor).await?;
        }

        match outcome {
            GateOutcome::Locked { time_left_minutes } => {
                tracing::warn!(
                    session_id = %session.id,
                    actor = %input.actor,
                    time_left_minutes,
                    "Login attempt rejected, identifier locked out"
                );
            }
            GateOutcome::AlreadyAuthorized => {
                tracing::debug!(
                    session_id = %session.id,
                    actor = %input.actor,
                    "Login attempt on already authorized session"
                );
            }
            GateOutcome::ProceedIncrement { attempt_count } => {
                tracing::info!(
                    session_id = %session.id,
                    actor = %input.actor,
                    attempt_count,
                    "Login attempt counted"
                );
            }
            GateOutcome::ProceedNew | GateOutcome::ProceedReset => {
                tracing::debug!(
                    session_id = %session.id,
                    actor = %input.actor,
                    outcome = outcome.code(),
                    "Login attempt allowed"
                );
            }
        }

        let session_token = issue_session_token(&session.id, &self.config.session_secret);

        Ok(LoginAttemptOutput {
            outcome,
            session,
            session_token,
            created,
        })
    }
}
