// seed.rs
// The shared seed: 32 raw bytes, canonically written as 64 lowercase hex
// characters. Base32 (RFC 4648, no padding) is the form authenticator apps
// consume; every encode goes through the same function so generation and
// verification can never disagree on the alphabet or padding.

use std::fmt;

use data_encoding::{BASE32_NOPAD, HEXLOWER};

use crate::error::AuthError;

pub const SEED_BYTES: usize = 32;
pub const SEED_HEX_CHARS: usize = 64;

/// Canonical base32 encoding (alphabet A-Z2-7, 5-bit big-endian groups,
/// no padding).
pub fn base32_nopad(bytes: &[u8]) -> String {
    BASE32_NOPAD.encode(bytes)
}

#[derive(Clone, PartialEq, Eq)]
pub struct Seed([u8; SEED_BYTES]);

impl Seed {
    /// Strict parse of the canonical hex form. Rejects wrong length,
    /// uppercase, and anything outside `[0-9a-f]`.
    pub fn from_hex(text: &str) -> Result<Self, AuthError> {
        if text.len() != SEED_HEX_CHARS {
            return Err(AuthError::InvalidSeed);
        }
        let raw = HEXLOWER
            .decode(text.as_bytes())
            .map_err(|_| AuthError::InvalidSeed)?;
        let mut bytes = [0u8; SEED_BYTES];
        bytes.copy_from_slice(&raw);
        Ok(Seed(bytes))
    }

    pub fn from_bytes(bytes: [u8; SEED_BYTES]) -> Self {
        Seed(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        HEXLOWER.encode(&self.0)
    }

    pub fn to_base32(&self) -> String {
        base32_nopad(&self.0)
    }
}

impl fmt::Debug for Seed {
    // Keep seed material out of logs and panic messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}
