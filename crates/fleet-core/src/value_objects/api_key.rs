//! Robot API key - the per-robot bearer secret issued at registration

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;
use subtle::ConstantTimeEq;

/// Per-robot secret.
///
/// 24 random bytes (192 bits) rendered as 48 lowercase hex characters.
/// `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Number of random bytes behind a key
    pub const BYTES: usize = 24;

    /// Length of the hex representation
    pub const LEN: usize = Self::BYTES * 2;

    /// Generate a fresh key from the OS random source
    pub fn generate() -> Self {
        let mut buf = [0u8; Self::BYTES];
        OsRng.fill_bytes(&mut buf);
        Self(hex::encode(buf))
    }

    /// Wrap a key loaded from storage
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    /// Borrow the key text
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the key text
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Compare a caller-supplied candidate in constant time
    pub fn verify(&self, candidate: &str) -> bool {
        self.0.as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}
