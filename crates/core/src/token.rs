//! Bearer-token generation for sessions.
//!
//! Tokens are 32 cryptographically random bytes. The token is the bearer
//! secret itself: it is stored verbatim and compared byte-for-byte on
//! lookup, so it must never appear in logs or `Debug` output.

use rand::Rng;

/// Length of a session token in bytes.
pub const TOKEN_LENGTH: usize = 32;

/// A freshly minted session bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken([u8; TOKEN_LENGTH]);

impl SessionToken {
    /// Generate a new random token.
    pub fn generate() -> Self {
        let mut bytes = [0u8; TOKEN_LENGTH];
        rand::rng().fill(&mut bytes[..]);
        Self(bytes)
    }

    /// Reconstruct a token from raw bytes, e.g. one presented by a caller.
    ///
    /// Returns `None` unless `bytes` is exactly [`TOKEN_LENGTH`] long.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; TOKEN_LENGTH] = bytes.try_into().ok()?;
        Some(Self(bytes))
    }

    /// The raw token bytes, for storage binding or transmission.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    /// Redacted: the token is a bearer secret.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SessionToken(..)")
    }
}
