// provision.rs
// Seed provisioning: RSA-OAEP (SHA-256 digest and MGF1, empty label) over the
// seed's hex form, transported as base64. Decryption failures collapse into a
// single generic error so responses cannot act as a padding oracle.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use openssl::{
    encrypt::{Decrypter, Encrypter},
    hash::MessageDigest,
    pkey::{HasPublic, PKey, Private},
    rsa::Padding,
};

use crate::{error::AuthError, seed::Seed};

/// Decrypt a base64 ciphertext into a validated seed. The caller decides
/// whether to persist the result; nothing is written here.
pub fn decrypt_seed(key: &PKey<Private>, encrypted_b64: &str) -> Result<Seed, AuthError> {
    let ciphertext = BASE64
        .decode(encrypted_b64)
        .map_err(|_| AuthError::Decryption)?;
    if ciphertext.is_empty() {
        return Err(AuthError::Decryption);
    }

    let mut decrypter = Decrypter::new(key).map_err(|_| AuthError::Decryption)?;
    decrypter
        .set_rsa_padding(Padding::PKCS1_OAEP)
        .map_err(|_| AuthError::Decryption)?;
    decrypter
        .set_rsa_oaep_md(MessageDigest::sha256())
        .map_err(|_| AuthError::Decryption)?;
    decrypter
        .set_rsa_mgf1_md(MessageDigest::sha256())
        .map_err(|_| AuthError::Decryption)?;

    let buffer_len = decrypter
        .decrypt_len(&ciphertext)
        .map_err(|_| AuthError::Decryption)?;
    let mut plaintext = vec![0u8; buffer_len];
    let written = decrypter
        .decrypt(&ciphertext, &mut plaintext)
        .map_err(|_| AuthError::Decryption)?;
    plaintext.truncate(written);

    let text = std::str::from_utf8(&plaintext).map_err(|_| AuthError::InvalidSeed)?;
    Seed::from_hex(text)
}

/// Encrypt a seed's hex form under a public key, base64-encoded. Counterpart
/// of `decrypt_seed` used by operators producing provisioning blobs and by
/// the round-trip tests.
pub fn encrypt_seed<T: HasPublic>(key: &PKey<T>, seed_hex: &str) -> Result<String, AuthError> {
    let mut encrypter = Encrypter::new(key).map_err(|_| AuthError::Crypto)?;
    encrypter
        .set_rsa_padding(Padding::PKCS1_OAEP)
        .map_err(|_| AuthError::Crypto)?;
    encrypter
        .set_rsa_oaep_md(MessageDigest::sha256())
        .map_err(|_| AuthError::Crypto)?;
    encrypter
        .set_rsa_mgf1_md(MessageDigest::sha256())
        .map_err(|_| AuthError::Crypto)?;

    let buffer_len = encrypter
        .encrypt_len(seed_hex.as_bytes())
        .map_err(|_| AuthError::Crypto)?;
    let mut ciphertext = vec![0u8; buffer_len];
    let written = encrypter
        .encrypt(seed_hex.as_bytes(), &mut ciphertext)
        .map_err(|_| AuthError::Crypto)?;
    ciphertext.truncate(written);

    Ok(BASE64.encode(&ciphertext))
}
