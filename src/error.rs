// error.rs
// Error taxonomy for the seed service. Messages stay generic on purpose:
// decryption failures must not reveal whether base64, padding, or the key
// itself was at fault.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// A request field was missing or had the wrong JSON type.
    #[error("missing or invalid request field")]
    InvalidInput,

    /// Ciphertext could not be decrypted: bad base64, wrong length, or
    /// key/padding mismatch.
    #[error("decryption failed")]
    Decryption,

    /// Decrypted or stored text is not a 64-character lowercase hex seed.
    #[error("invalid seed material")]
    InvalidSeed,

    /// No seed has ever been provisioned.
    #[error("seed not provisioned yet")]
    NotProvisioned,

    /// Durable seed slot could not be read or written.
    #[error("seed storage failure")]
    Storage(#[from] std::io::Error),

    /// Key handling or code derivation failed outside the decrypt path.
    #[error("internal crypto failure")]
    Crypto,
}

impl AuthError {
    fn status(&self) -> StatusCode {
        match self {
            AuthError::InvalidInput => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
