//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the backend crates:
//! - Cryptographic utilities (HMAC-SHA256, Base64, secure randomness)
//! - Cookie parsing and `Set-Cookie` construction

pub mod cookie;
pub mod crypto;
