// totp.rs
// TOTP engine: derive and check 6-digit codes from the stored seed.
// Google-Authenticator-compatible parameters: HMAC-SHA1, 6 digits, 30-second
// steps. The seed is encoded to canonical base32 and fed through
// `Secret::Encoded`, the same path an enrolling authenticator app takes.

use totp_rs::{Algorithm, Secret, TOTP};

use crate::{error::AuthError, seed::Seed};

pub const STEP_SECONDS: u64 = 30;
pub const CODE_DIGITS: usize = 6;
pub const DEFAULT_WINDOW: u8 = 1; // ±1 step to absorb small clock drift

pub fn unix_now() -> u64 {
    chrono::Utc::now().timestamp() as u64
}

pub fn current_step(now: u64) -> u64 {
    now / STEP_SECONDS
}

/// Seconds the code for `now` stays valid. 30 exactly on a step boundary,
/// never 0.
pub fn remaining_at(now: u64) -> u64 {
    STEP_SECONDS - now % STEP_SECONDS
}

pub fn remaining_seconds() -> u64 {
    remaining_at(unix_now())
}

/// True iff `code` has the exact shape of a one-time code: 6 ASCII digits.
pub fn is_code_shape(code: &str) -> bool {
    code.len() == CODE_DIGITS && code.bytes().all(|b| b.is_ascii_digit())
}

fn build_totp(seed: &Seed, window: u8) -> Result<TOTP, AuthError> {
    let key = Secret::Encoded(seed.to_base32())
        .to_bytes()
        .map_err(|_| AuthError::Crypto)?;
    TOTP::new(Algorithm::SHA1, CODE_DIGITS, window, STEP_SECONDS, key)
        .map_err(|_| AuthError::Crypto)
}

/// Code for the step containing `now`: HMAC-SHA1 over the 8-byte big-endian
/// step counter, dynamically truncated to 31 bits, mod 1_000_000,
/// left-zero-padded.
pub fn generate_at(seed: &Seed, now: u64) -> Result<String, AuthError> {
    Ok(build_totp(seed, DEFAULT_WINDOW)?.generate(now))
}

pub fn generate(seed: &Seed) -> Result<String, AuthError> {
    generate_at(seed, unix_now())
}

/// Accept iff `code` matches some step in `[current - window, current + window]`.
/// Malformed codes are rejected before the seed is touched.
pub fn verify_at(seed: &Seed, code: &str, window: u8, now: u64) -> Result<bool, AuthError> {
    if !is_code_shape(code) {
        return Ok(false);
    }
    Ok(build_totp(seed, window)?.check(code, now))
}

pub fn verify(seed: &Seed, code: &str, window: u8) -> Result<bool, AuthError> {
    verify_at(seed, code, window, unix_now())
}
