//! Attempt Record Entity
//!
//! Per-identifier login submission counter.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Login submissions seen for one identifier within one actor profile
///
/// `attempt_count` is never zero: it starts at 1, grows up to the policy
/// maximum, and is reset back to 1 after the lockout window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    /// Number of submissions counted so far
    pub attempt_count: u32,
    /// Most recent counted submission (UTC)
    pub last_attempt_time: DateTime<Utc>,
}

impl AttemptRecord {
    /// First submission for an identifier
    pub fn first(now: DateTime<Utc>) -> Self {
        Self {
            attempt_count: 1,
            last_attempt_time: now,
        }
    }

    /// Count another submission
    pub fn increment(&mut self, now: DateTime<Utc>) {
        self.attempt_count += 1;
        self.last_attempt_time = now;
    }

    /// Grant one fresh attempt after the cooldown
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.attempt_count = 1;
        self.last_attempt_time = now;
    }

    /// Time since the last counted submission
    pub fn elapsed(&self, now: DateTime<Utc>) -> TimeDelta {
        now - self.last_attempt_time
    }
}
