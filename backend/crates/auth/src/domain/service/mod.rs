//! Domain Services

pub mod attempt_gate;

pub use attempt_gate::{AttemptGate, GateOutcome, LockoutPolicy};
