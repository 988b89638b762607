//! Profile State Entity
//!
//! Per-actor-class authentication state stored inside a session.
//! The attempt gate owns `attempts`; the credential step owns
//! `authorized`, `authorized_time` and `user_id`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::attempt_record::AttemptRecord;

/// Authentication state of one actor class within one session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileState {
    /// Attempt tracking keyed by login identifier
    pub attempts: HashMap<String, AttemptRecord>,
    /// Last time a submission for this profile was let through
    #[serde(default)]
    pub last_login_attempt_time: Option<DateTime<Utc>>,
    /// When credentials were last verified
    #[serde(default)]
    pub authorized_time: Option<DateTime<Utc>>,
    /// Verified account id
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Whether this actor is signed in on this session
    #[serde(default)]
    pub authorized: bool,
}

impl ProfileState {
    pub fn is_authorized(&self) -> bool {
        self.authorized
    }

    pub fn attempt(&self, identifier: &str) -> Option<&AttemptRecord> {
        self.attempts.get(identifier)
    }

    /// Record a successful credential check
    pub fn authorize(&mut self, user_id: i64, now: DateTime<Utc>) {
        self.authorized = true;
        self.authorized_time = Some(now);
        self.user_id = Some(user_id);
    }
}
