//! Application Layer
//!
//! Use cases and application services.

pub mod complete_login;
pub mod config;
pub mod login_attempt;
pub mod session_token;
pub mod sweep;

// Re-exports
pub use complete_login::{CompleteLoginInput, CompleteLoginUseCase};
pub use config::AuthConfig;
pub use login_attempt::{LoginAttemptInput, LoginAttemptOutput, LoginAttemptUseCase};
pub use session_token::{issue_session_token, verify_session_token};
pub use sweep::{SessionSweeper, SweepHandle};
