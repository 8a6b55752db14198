// keys.rs
// RSA private key material. Loaded once at startup from an operator-controlled
// path; an unreadable or unparseable key is a fatal configuration error, never
// a per-request one.

use std::{env, fs};

use anyhow::{Context, Result};
use openssl::pkey::{PKey, Private};

pub const DEFAULT_PRIVATE_KEY_FILE: &str = "./keys/student_private.pem";

pub fn private_key_path() -> String {
    env::var("PRIVATE_KEY_FILE").unwrap_or_else(|_| DEFAULT_PRIVATE_KEY_FILE.to_string())
}

/// Load the PEM RSA private key (4096-bit modulus, e = 65537).
pub fn load_private_key() -> Result<PKey<Private>> {
    let path = private_key_path();
    let pem = fs::read(&path).with_context(|| format!("failed to read private key at {path}"))?;
    PKey::private_key_from_pem(&pem)
        .with_context(|| format!("failed to parse private key at {path}"))
}
