//! Actor Class Value Object
//!
//! The two independent authentication contexts that share one session.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Who is logging in
///
/// - `Host`: operators of the application (master dashboard)
/// - `Customer`: tenants' end-users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorClass {
    #[display("host")]
    Host,
    #[display("customer")]
    Customer,
}

impl ActorClass {
    /// Every actor class, in session envelope order
    pub const ALL: [ActorClass; 2] = [ActorClass::Host, ActorClass::Customer];

    /// Key of this actor's profile inside the session envelope
    #[inline]
    pub const fn session_key(&self) -> &'static str {
        match self {
            ActorClass::Host => "host",
            ActorClass::Customer => "customer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_session_key() {
        for actor in ActorClass::ALL {
            assert_eq!(actor.to_string(), actor.session_key());
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&ActorClass::Host).unwrap(), r#""host""#);
        let actor: ActorClass = serde_json::from_str(r#""customer""#).unwrap();
        assert_eq!(actor, ActorClass::Customer);
    }
}
