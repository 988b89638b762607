//! Value Objects

pub mod actor_class;
pub mod login_identifier;

pub use actor_class::ActorClass;
pub use login_identifier::LoginIdentifier;
