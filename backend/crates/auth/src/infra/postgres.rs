//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::SessionId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{SessionRecord, SessionValues};
use crate::domain::repository::{CredentialVerifier, SessionStore};
use crate::domain::value_object::{ActorClass, LoginIdentifier};
use crate::error::AuthResult;

/// PostgreSQL-backed session store
#[derive(Clone)]
pub struct PgSessionStore {
    pool: PgPool,
}

impl PgSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SessionStore for PgSessionStore {
    async fn find(&self, session_id: &SessionId) -> AuthResult<Option<SessionRecord>> {
        let now_ms = Utc::now().timestamp_millis();

        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                session_id,
                data,
                expires_at_ms,
                created_at,
                updated_at
            FROM sessions
            WHERE session_id = $1 AND expires_at_ms > $2
            "#,
        )
        .bind(session_id.as_uuid())
        .bind(now_ms)
        .fetch_optional(&self.pool)
        .await?;

        row.map(SessionRow::into_session_record).transpose()
    }

    async fn create(&self, session: &SessionRecord) -> AuthResult<()> {
        let data = serde_json::to_value(&session.values)?;

        sqlx::query(
            r#"
            INSERT INTO sessions (
                session_id,
                data,
                expires_at_ms,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(session.id.as_uuid())
        .bind(data)
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .bind(session.updated_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!(session_id = %session.id, "Session row inserted");
        Ok(())
    }

    async fn save(&self, session: &SessionRecord, actor: ActorClass) -> AuthResult<()> {
        let data = serde_json::to_value(&session.values)?;
        let key = actor.session_key();

        // Only the actor's own branch of the stored envelope is replaced.
        // The insert branch covers a record swept after it was read.
        sqlx::query(
            r#"
            INSERT INTO sessions (
                session_id,
                data,
                expires_at_ms,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (session_id) DO UPDATE SET
                data = jsonb_set(sessions.data, ARRAY[$6::text], EXCLUDED.data -> $6::text),
                expires_at_ms = EXCLUDED.expires_at_ms,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(session.id.as_uuid())
        .bind(data)
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .bind(session.updated_at)
        .bind(key)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> AuthResult<u64> {
        let deleted = sqlx::query("DELETE FROM sessions WHERE expires_at_ms < $1")
            .bind(now.timestamp_millis())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

/// Credential check against the account tables
///
/// Hosts live in `master_users`, customers in `users`. Both store a
/// `crypt()` hash (pgcrypto) in `password_hash`. Emails are matched on
/// `lower(email)` since login identifiers arrive case-folded.
#[derive(Clone)]
pub struct PgCredentialVerifier {
    pool: PgPool,
}

impl PgCredentialVerifier {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn query_for(actor: ActorClass) -> &'static str {
        match actor {
            ActorClass::Host => {
                "SELECT id FROM master_users WHERE lower(email) = $1 AND password_hash = crypt($2, password_hash)"
            }
            ActorClass::Customer => {
                "SELECT id FROM users WHERE lower(email) = $1 AND password_hash = crypt($2, password_hash)"
            }
        }
    }
}

impl CredentialVerifier for PgCredentialVerifier {
    async fn verify(
        &self,
        actor: ActorClass,
        identifier: &LoginIdentifier,
        secret: &str,
    ) -> AuthResult<Option<i64>> {
        let user_id = sqlx::query_scalar::<_, i64>(Self::query_for(actor))
            .bind(identifier.as_str())
            .bind(secret)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user_id)
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: Uuid,
    data: serde_json::Value,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session_record(self) -> AuthResult<SessionRecord> {
        let values: SessionValues = serde_json::from_value(self.data)?;

        Ok(SessionRecord {
            id: SessionId::from_uuid(self.session_id),
            values,
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
