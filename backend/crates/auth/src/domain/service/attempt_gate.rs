//! Attempt Gate
//!
//! Decides whether a login submission may proceed to credential
//! verification, and applies the matching change to the profile.
//!
//! Evaluation order:
//! 1. profile already authorized → [`GateOutcome::AlreadyAuthorized`]
//! 2. identifier never seen → new record, [`GateOutcome::ProceedNew`]
//! 3. count at the maximum:
//!    - lockout window elapsed → reset to 1, [`GateOutcome::ProceedReset`]
//!    - otherwise → [`GateOutcome::Locked`] (nothing is written)
//! 4. count below the maximum → increment, [`GateOutcome::ProceedIncrement`]
//!
//! The lockout is measured from the last *counted* submission. Rejected
//! submissions do not touch the record, so hammering a locked identifier
//! never extends the lockout.

use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::entity::{AttemptRecord, ProfileState};
use crate::domain::value_object::LoginIdentifier;

/// Throttling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockoutPolicy {
    /// Submissions allowed per identifier before lockout
    pub max_attempts: u32,
    /// Lockout length, measured from the last counted submission
    pub lockout_window: TimeDelta,
}

impl LockoutPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    pub const DEFAULT_LOCKOUT_MINUTES: i64 = 30;

    pub fn new(max_attempts: u32, lockout_window: TimeDelta) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            lockout_window,
        }
    }
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MAX_ATTEMPTS,
            TimeDelta::minutes(Self::DEFAULT_LOCKOUT_MINUTES),
        )
    }
}

/// Result of evaluating one login submission
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateOutcome {
    /// First submission for this identifier
    ProceedNew,
    /// Counted another submission; carries the new count
    ProceedIncrement { attempt_count: u32 },
    /// Lockout elapsed; one fresh attempt granted
    ProceedReset,
    /// Too many submissions; minutes until the lockout clears (> 0)
    Locked { time_left_minutes: f64 },
    /// This actor is already signed in on the session
    AlreadyAuthorized,
}

impl GateOutcome {
    /// Whether the caller may continue to credential verification
    pub fn is_proceed(&self) -> bool {
        matches!(
            self,
            GateOutcome::ProceedNew
                | GateOutcome::ProceedIncrement { .. }
                | GateOutcome::ProceedReset
        )
    }

    /// Whether the profile was changed and must be persisted
    pub fn mutated(&self) -> bool {
        self.is_proceed()
    }

    /// Short name for logs
    pub const fn code(&self) -> &'static str {
        match self {
            GateOutcome::ProceedNew => "proceed_new",
            GateOutcome::ProceedIncrement { .. } => "proceed_increment",
            GateOutcome::ProceedReset => "proceed_reset",
            GateOutcome::Locked { .. } => "locked",
            GateOutcome::AlreadyAuthorized => "already_authorized",
        }
    }
}

/// Login attempt gate
#[derive(Debug, Clone, Copy, Default)]
pub struct AttemptGate {
    policy: LockoutPolicy,
}

impl AttemptGate {
    pub fn new(policy: LockoutPolicy) -> Self {
        Self { policy }
    }

    /// Evaluate a submission and apply its effect to `profile`
    ///
    /// Never fails. Only the `Proceed*` outcomes modify `profile`.
    pub fn evaluate(
        &self,
        profile: &mut ProfileState,
        identifier: &LoginIdentifier,
        now: DateTime<Utc>,
    ) -> GateOutcome {
        if profile.is_authorized() {
            return GateOutcome::AlreadyAuthorized;
        }

        let outcome = match profile.attempts.get_mut(identifier.as_str()) {
            None => {
                profile
                    .attempts
                    .insert(identifier.as_str().to_string(), AttemptRecord::first(now));
                GateOutcome::ProceedNew
            }
            Some(record) if record.attempt_count >= self.policy.max_attempts => {
                let elapsed = record.elapsed(now);
                if elapsed >= self.policy.lockout_window {
                    record.reset(now);
                    GateOutcome::ProceedReset
                } else {
                    // Clamped so a clock step backwards cannot report more
                    // than one full window.
                    let remaining = (self.policy.lockout_window - elapsed)
                        .min(self.policy.lockout_window);
                    return GateOutcome::Locked {
                        time_left_minutes: to_minutes(remaining),
                    };
                }
            }
            Some(record) => {
                record.increment(now);
                GateOutcome::ProceedIncrement {
                    attempt_count: record.attempt_count,
                }
            }
        };

        profile.last_login_attempt_time = Some(now);
        outcome
    }
}

fn to_minutes(delta: TimeDelta) -> f64 {
    match delta.num_microseconds() {
        Some(us) => us as f64 / 60_000_000.0,
        None => delta.num_milliseconds() as f64 / 60_000.0,
    }
}
