//! Repository Traits
//!
//! Interfaces for session persistence and credential checks.
//! Implementations live in the infrastructure layer.

use chrono::{DateTime, Utc};
use kernel::id::SessionId;

use crate::domain::entity::SessionRecord;
use crate::domain::value_object::{ActorClass, LoginIdentifier};
use crate::error::AuthResult;

/// Session record store
///
/// The store owns session records; callers borrow a copy for the length of
/// one request and write back the one profile they worked on with
/// [`LocalSessionStore::save`].
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Fetch a session that has not expired
    async fn find(&self, session_id: &SessionId) -> AuthResult<Option<SessionRecord>>;

    /// Insert a freshly created session
    async fn create(&self, session: &SessionRecord) -> AuthResult<()>;

    /// Write back `actor`'s profile and the sliding expiry
    ///
    /// The other actor's stored profile is left as it is, so concurrent
    /// requests only race on the same profile (last writer wins). A record
    /// swept since it was read is recreated from `session`.
    async fn save(&self, session: &SessionRecord, actor: ActorClass) -> AuthResult<()>;

    /// Delete every session that expired before `now`; returns the count
    async fn delete_expired(&self, now: DateTime<Utc>) -> AuthResult<u64>;
}

/// Credential verification, downstream of the attempt gate
#[trait_variant::make(CredentialVerifier: Send)]
pub trait LocalCredentialVerifier {
    /// Returns the account id when `secret` matches, `None` otherwise
    async fn verify(
        &self,
        actor: ActorClass,
        identifier: &LoginIdentifier,
        secret: &str,
    ) -> AuthResult<Option<i64>>;
}
