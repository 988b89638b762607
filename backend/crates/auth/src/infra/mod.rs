//! Infrastructure Layer
//!
//! Session store and credential check implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemorySessionStore;
pub use postgres::{PgCredentialVerifier, PgSessionStore};
