//! Login Identifier Value Object
//!
//! The credential key (email address) that attempt tracking is keyed by.
//! Full syntactic validation happens upstream; this type only guarantees
//! a non-empty, normalized key.

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// Maximum identifier length (per RFC 5321 for email addresses)
const IDENTIFIER_MAX_LENGTH: usize = 254;

/// Normalized login identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoginIdentifier(String);

impl LoginIdentifier {
    /// Trim and lowercase the submitted identifier
    ///
    /// Lowercasing keeps `User@Test.com` and `user@test.com` on one counter.
    pub fn new(raw: impl AsRef<str>) -> AuthResult<Self> {
        let identifier = raw.as_ref().trim().to_lowercase();

        if identifier.is_empty() {
            return Err(AuthError::InvalidIdentifier("identifier is empty".into()));
        }

        if identifier.len() > IDENTIFIER_MAX_LENGTH {
            return Err(AuthError::InvalidIdentifier(format!(
                "identifier must be at most {} characters",
                IDENTIFIER_MAX_LENGTH
            )));
        }

        Ok(Self(identifier))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        let id = LoginIdentifier::new("  U@Test.com ").unwrap();
        assert_eq!(id.as_str(), "u@test.com");
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            LoginIdentifier::new("   "),
            Err(AuthError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_rejects_too_long() {
        let long = format!("{}@x.com", "a".repeat(250));
        assert!(LoginIdentifier::new(long).is_err());
    }
}
