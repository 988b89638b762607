//! Domain Entities

pub mod attempt_record;
pub mod profile_state;
pub mod session_record;

pub use attempt_record::AttemptRecord;
pub use profile_state::ProfileState;
pub use session_record::{SessionRecord, SessionValues};
