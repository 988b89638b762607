//! Session Token
//!
//! Cookie value referencing a session record:
//! `<session uuid>.<base64url(HMAC-SHA256(secret, session uuid))>`

use kernel::id::SessionId;
use platform::crypto::{constant_time_eq, from_base64_url, hmac_sha256, to_base64_url};

/// Sign a session id for the cookie
pub fn issue_session_token(session_id: &SessionId, secret: &[u8; 32]) -> String {
    let id = session_id.to_string();
    let signature = hmac_sha256(secret, id.as_bytes());
    format!("{}.{}", id, to_base64_url(&signature))
}

/// Verify a cookie value and extract the session id
///
/// Any malformed or tampered token yields `None`, which callers treat
/// exactly like a missing cookie.
pub fn verify_session_token(token: &str, secret: &[u8; 32]) -> Option<SessionId> {
    let (id, signature_b64) = token.split_once('.')?;
    let provided = from_base64_url(signature_b64).ok()?;
    let expected = hmac_sha256(secret, id.as_bytes());

    if !constant_time_eq(&provided, &expected) {
        return None;
    }

    id.parse().ok()
}
