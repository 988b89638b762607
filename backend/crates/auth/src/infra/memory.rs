//! In-Memory Session Store
//!
//! Process-local store for tests and single-node development runs.
//! Records are kept in their encoded form so the session envelope goes
//! through the same serialization as in PostgreSQL.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::SessionId;
use tokio::sync::RwLock;

use crate::domain::entity::{SessionRecord, SessionValues};
use crate::domain::repository::SessionStore;
use crate::domain::value_object::ActorClass;
use crate::error::AuthResult;

#[derive(Debug, Clone)]
struct StoredSession {
    data: serde_json::Value,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// In-memory session store
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, StoredSession>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records, expired ones included
    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    #[cfg(test)]
    pub(crate) async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Store an arbitrary encoded envelope under `session_id`
    #[cfg(test)]
    pub(crate) async fn insert_raw(
        &self,
        session_id: SessionId,
        data: serde_json::Value,
        expires_at_ms: i64,
    ) {
        let now = Utc::now();
        self.sessions.write().await.insert(
            session_id,
            StoredSession {
                data,
                expires_at_ms,
                created_at: now,
                updated_at: now,
            },
        );
    }

    fn encode(session: &SessionRecord) -> AuthResult<StoredSession> {
        Ok(StoredSession {
            data: serde_json::to_value(&session.values)?,
            expires_at_ms: session.expires_at_ms,
            created_at: session.created_at,
            updated_at: session.updated_at,
        })
    }
}

impl SessionStore for InMemorySessionStore {
    async fn find(&self, session_id: &SessionId) -> AuthResult<Option<SessionRecord>> {
        let now_ms = Utc::now().timestamp_millis();
        let sessions = self.sessions.read().await;

        let Some(stored) = sessions.get(session_id) else {
            return Ok(None);
        };
        if stored.expires_at_ms <= now_ms {
            return Ok(None);
        }

        let values: SessionValues = serde_json::from_value(stored.data.clone())?;
        Ok(Some(SessionRecord {
            id: *session_id,
            values,
            expires_at_ms: stored.expires_at_ms,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }))
    }

    async fn create(&self, session: &SessionRecord) -> AuthResult<()> {
        let stored = Self::encode(session)?;
        self.sessions.write().await.insert(session.id, stored);
        Ok(())
    }

    async fn save(&self, session: &SessionRecord, actor: ActorClass) -> AuthResult<()> {
        let profile = serde_json::to_value(session.profile(actor))?;
        let encoded = Self::encode(session)?;

        let mut sessions = self.sessions.write().await;
        let Some(stored) = sessions.get_mut(&session.id) else {
            sessions.insert(session.id, encoded);
            return Ok(());
        };

        match stored.data.as_object_mut() {
            Some(envelope) => {
                envelope.insert(actor.session_key().to_string(), profile);
            }
            None => stored.data = encoded.data,
        }
        stored.expires_at_ms = encoded.expires_at_ms;
        stored.updated_at = encoded.updated_at;

        Ok(())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> AuthResult<u64> {
        let now_ms = now.timestamp_millis();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, stored| stored.expires_at_ms >= now_ms);
        Ok((before - sessions.len()) as u64)
    }
}
