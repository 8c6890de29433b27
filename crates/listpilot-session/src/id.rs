//! Session identifier generation.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;

/// Generate an unpredictable session identifier.
///
/// The identifier is the only credential the frontend ever holds for the
/// stored access token, so it must not be guessable: 32 random bytes,
/// base64url-encoded without padding.
pub fn generate_session_id() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
