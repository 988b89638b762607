//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the login gate middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{GatedLogin, customer_login_gate, host_login_gate, login_gate};
pub use router::{auth_router, auth_router_generic};
