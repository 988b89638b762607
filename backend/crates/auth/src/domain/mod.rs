//! Domain Layer
//!
//! Contains entities, value objects, the attempt gate, and repository traits.

pub mod entity;
pub mod repository;
pub mod service;
pub mod value_object;

// Re-exports
pub use entity::{AttemptRecord, ProfileState, SessionRecord, SessionValues};
pub use repository::{CredentialVerifier, SessionStore};
pub use service::{AttemptGate, GateOutcome, LockoutPolicy};
pub use value_object::{ActorClass, LoginIdentifier};
