//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Attempt gate, session entities, repository traits
//! - `application/` - Use cases, session token, sweep task
//! - `infra/` - PostgreSQL and in-memory implementations
//! - `presentation/` - Login gate middleware, handlers, DTOs, router
//!
//! ## Features
//! - Per-identifier login attempt throttling (3 submissions, 30 minute lockout)
//! - Separate host and customer profiles inside one server-side session
//! - Signed session cookie (`<uuid>.<HMAC-SHA256>`)
//! - Periodic sweep of expired sessions
//!
//! ## Security Model
//! - Every submission counts, whether or not the credentials match
//! - A locked identifier cannot extend its own lockout
//! - Passwords are compared in PostgreSQL with `crypt()`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::sweep::{SessionSweeper, SweepHandle};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::{PgCredentialVerifier, PgSessionStore};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::memory::InMemorySessionStore;
    pub use crate::infra::postgres::PgSessionStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
