//! Session Record Entity
//!
//! A persisted server-side session. Always carries both actor profiles.

use chrono::{DateTime, Utc};
use kernel::id::SessionId;
use serde::{Deserialize, Serialize};

use crate::domain::entity::profile_state::ProfileState;
use crate::domain::value_object::ActorClass;

/// Typed session envelope
///
/// Both profiles are required when decoding; a stored envelope missing
/// either one is rejected instead of being silently defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionValues {
    pub host: ProfileState,
    pub customer: ProfileState,
}

impl SessionValues {
    pub fn profile(&self, actor: ActorClass) -> &ProfileState {
        match actor {
            ActorClass::Host => &self.host,
            ActorClass::Customer => &self.customer,
        }
    }

    pub fn profile_mut(&mut self, actor: ActorClass) -> &mut ProfileState {
        match actor {
            ActorClass::Host => &mut self.host,
            ActorClass::Customer => &mut self.customer,
        }
    }
}

/// Session record entity
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    /// Session ID (UUID v4), referenced by the signed cookie
    pub id: SessionId,
    /// Host and customer profiles
    pub values: SessionValues,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Create a new session with both profiles empty
    pub fn new(ttl_ms: i64, now: DateTime<Utc>) -> Self {
        Self {
            id: SessionId::new(),
            values: SessionValues::default(),
            expires_at_ms: now.timestamp_millis() + ttl_ms,
            created_at: now,
            updated_at: now,
        }
    }

    /// Slide the expiry forward; called before every save
    pub fn refresh(&mut self, ttl_ms: i64, now: DateTime<Utc>) {
        self.updated_at = now;
        self.expires_at_ms = now.timestamp_millis() + ttl_ms;
    }

    pub fn profile(&self, actor: ActorClass) -> &ProfileState {
        self.values.profile(actor)
    }

    pub fn profile_mut(&mut self, actor: ActorClass) -> &mut ProfileState {
        self.values.profile_mut(actor)
    }
}
